use dskit::collection::Collection;
use dskit::linked_list::LinkedList;
use dskit::queue::Queue;
use dskit::stack::Stack;

fn drain<C: Collection<u8>>(c: &mut C) -> Vec<u8> {
    let mut out = Vec::new();
    while let Ok(x) = c.remove() {
        out.push(x);
    }
    out
}

quickcheck::quickcheck! {
    fn stack_reverses(xs: Vec<u8>) -> bool {
        let mut stack: Stack<_> = xs.iter().copied().collect();
        let mut expected = xs;
        expected.reverse();

        drain(&mut stack) == expected && stack.is_empty()
    }
}

quickcheck::quickcheck! {
    fn queue_preserves_order(xs: Vec<u8>) -> bool {
        let mut queue: Queue<_> = xs.iter().copied().collect();

        drain(&mut queue) == xs && queue.is_empty()
    }
}

quickcheck::quickcheck! {
    fn list_traverse_matches_inserts(xs: Vec<u8>) -> bool {
        let list: LinkedList<_> = xs.iter().copied().collect();

        list.traverse().copied().eq(xs.iter().copied()) && list.len() == xs.len()
    }
}

quickcheck::quickcheck! {
    fn list_as_collection_is_lifo(xs: Vec<u8>) -> bool {
        let mut list = LinkedList::new();
        for x in &xs {
            list.add(*x).unwrap();
        }
        let mut expected = xs;
        expected.reverse();

        drain(&mut list) == expected
    }
}
