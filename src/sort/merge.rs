//! Top-down merge sort over a [`Linked`] sequence

use super::Linked;

/// Sort the chain starting at `head` and return the new head
///
/// `less` is a strict "less-than" predicate. Elements for which it reports
/// false in both directions keep their relative order. Only successor links
/// are rewritten; recursion depth is O(log n).
pub fn merge_sort<L, F>(list: &mut L, head: Option<L::Node>, less: &F) -> Option<L::Node>
where
    L: Linked + ?Sized,
    F: Fn(&L::Item, &L::Item) -> bool + ?Sized,
{
    let head = head?;
    if list.next(head).is_none() {
        return Some(head);
    }

    // Detach the right half after the middle node
    let middle = middle(list, head);
    let right = list.next(middle);
    list.set_next(middle, None);

    let left = merge_sort(list, Some(head), less);
    let right = merge_sort(list, right, less);

    merge(list, left, right, less)
}

/// Slow/fast walk: slow advances one, fast two. For even lengths this
/// returns the first of the two middle nodes.
fn middle<L>(list: &L, head: L::Node) -> L::Node
where
    L: Linked + ?Sized,
{
    let mut slow = head;
    let mut fast = list.next(head);

    while let Some(step) = fast.and_then(|f| list.next(f)) {
        // slow trails fast, so it always has a successor here
        slow = match list.next(slow) {
            Some(n) => n,
            None => break,
        };
        fast = list.next(step);
    }

    slow
}

/// Merge two sorted, terminated chains
fn merge<L, F>(
    list: &mut L,
    mut left: Option<L::Node>,
    mut right: Option<L::Node>,
    less: &F,
) -> Option<L::Node>
where
    L: Linked + ?Sized,
    F: Fn(&L::Item, &L::Item) -> bool + ?Sized,
{
    let mut head = None;
    let mut tail: Option<L::Node> = None;

    loop {
        let taken = match (left, right) {
            (Some(l), Some(r)) => {
                // Right only wins when strictly less; ties keep left first
                if less(list.item(r), list.item(l)) {
                    right = list.next(r);
                    r
                } else {
                    left = list.next(l);
                    l
                }
            }
            (Some(rest), None) | (None, Some(rest)) => {
                append(list, &mut head, &mut tail, rest);
                break;
            }
            (None, None) => break,
        };

        append(list, &mut head, &mut tail, taken);
    }

    head
}

fn append<L>(list: &mut L, head: &mut Option<L::Node>, tail: &mut Option<L::Node>, node: L::Node)
where
    L: Linked + ?Sized,
{
    match *tail {
        Some(t) => list.set_next(t, Some(node)),
        None => *head = Some(node),
    }
    *tail = Some(node);
}

// =============================================================================
// Slice adapter
// =============================================================================

/// Index chain over a borrowed slice
struct IndexChain<'a, T> {
    items: &'a [T],
    links: Vec<Option<usize>>,
}

impl<T> Linked for IndexChain<'_, T> {
    type Node = usize;
    type Item = T;

    fn item(&self, node: usize) -> &T {
        &self.items[node]
    }

    fn next(&self, node: usize) -> Option<usize> {
        self.links[node]
    }

    fn set_next(&mut self, node: usize, next: Option<usize>) {
        self.links[node] = next;
    }
}

/// Return the positions of `items` in sorted order without moving them
///
/// Runs the same merge sort used by the record store over a chain of
/// indices `0 -> 1 -> .. -> n-1`.
pub fn sort_indices<T, F>(items: &[T], less: F) -> Vec<usize>
where
    F: Fn(&T, &T) -> bool,
{
    let n = items.len();
    let links = (0..n)
        .map(|i| if i + 1 < n { Some(i + 1) } else { None })
        .collect();
    let mut chain = IndexChain { items, links };

    let head = if n == 0 { None } else { Some(0) };
    let mut cursor = merge_sort(&mut chain, head, &less);

    let mut order = Vec::with_capacity(n);
    while let Some(i) = cursor {
        order.push(i);
        cursor = chain.next(i);
    }
    order
}
