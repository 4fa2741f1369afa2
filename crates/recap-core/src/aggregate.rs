//! Vendor grouping and chronological ordering.

use std::collections::HashMap;

use tracing::debug;

use crate::models::receipt::{GroupedOutput, ReceiptEntry, ReceiptRecord, VendorGroup};

/// Group records by vendor and sort each group's receipts by date.
///
/// Groups come out in first-appearance order of the vendor among the input
/// records; grouping uses an explicit order list plus lookup index rather
/// than any map iteration order. Within a group the sort is stable and
/// ascending on the canonical date. Undated receipts order before any dated
/// receipt (`Option`'s `None < Some` ordering); that is the chosen policy for
/// records whose date rule missed. Equal dates keep their original relative
/// order, so the result is invariant under any interleaving of the input
/// that preserves per-vendor relative order.
///
/// Total over its input domain: zero records yield an empty artifact.
pub fn aggregate<I>(records: I) -> GroupedOutput
where
    I: IntoIterator<Item = ReceiptRecord>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<VendorGroup> = Vec::new();

    for ReceiptRecord { vendor_name, receipt_date, amount } in records {
        let slot = match index.get(&vendor_name) {
            Some(&i) => i,
            None => {
                let i = groups.len();
                index.insert(vendor_name.clone(), i);
                groups.push(VendorGroup {
                    company_name: vendor_name,
                    receipts: Vec::new(),
                });
                i
            }
        };
        groups[slot].receipts.push(ReceiptEntry { receipt_date, amount });
    }

    for group in &mut groups {
        group.receipts.sort_by(|a, b| a.receipt_date.cmp(&b.receipt_date));
    }

    debug!("aggregated into {} vendor groups", groups.len());
    GroupedOutput(groups)
}
