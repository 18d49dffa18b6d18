/// Reposition an element within a sequence: remove it at `from` and
/// reinsert it at `to`, preserving the relative order of everything else.
/// Out-of-range indices are clamped; equal indices are a no-op.
pub fn move_item<T>(seq: &mut Vec<T>, from: usize, to: usize) {
    if seq.is_empty() || from == to {
        return;
    }
    let from = from.min(seq.len() - 1);
    let item = seq.remove(from);
    let to = to.min(seq.len());
    seq.insert(to, item);
}
