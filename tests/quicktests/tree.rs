use dskit::error::Error;
use dskit::key::Key;
use dskit::tree::Tree;

use crate::init_logger;

#[test]
fn small_tree_inorder() {
    init_logger();
    let tree = Tree::try_from_keys([5, 3, 7, 1, 4]).unwrap();

    assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7]);
    assert!(!tree.contains(&99));
}

#[test]
fn text_keys_from_the_command_line() {
    init_logger();
    let tree = Tree::try_from_keys(["pear", "apple", "fig"].map(Key::parse)).unwrap();

    assert_eq!(tree.to_string(), "apple fig pear");
}

#[test]
fn try_from_keys_stops_at_first_mismatch() {
    init_logger();
    let result = Tree::try_from_keys(["1", "2", "three", "4"].map(Key::parse));

    assert_eq!(
        result.unwrap_err(),
        Error::TypeMismatch {
            stored: "int",
            inserted: "text"
        }
    );
}

quickcheck::quickcheck! {
    fn inorder_is_non_decreasing(xs: Vec<i16>) -> bool {
        let tree = Tree::try_from_keys(xs).unwrap();
        let keys: Vec<_> = tree.inorder().collect();

        keys.windows(2).all(|w| w[0] <= w[1])
    }
}

quickcheck::quickcheck! {
    fn no_key_is_dropped(xs: Vec<u8>) -> bool {
        let n = xs.len();
        let tree = Tree::try_from_keys(xs).unwrap();

        tree.len() == n && tree.inorder().count() == n
    }
}

quickcheck::quickcheck! {
    fn inserted_keys_stay_found(xs: Vec<i8>, later: Vec<i8>) -> bool {
        let mut tree = Tree::try_from_keys(xs.iter().copied()).unwrap();
        for x in &later {
            tree.insert(*x).unwrap();
        }

        xs.iter().chain(&later).all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn absent_keys_are_not_found(xs: Vec<i8>, probe: i8) -> bool {
        let tree = Tree::try_from_keys(xs.iter().copied()).unwrap();

        tree.contains(&probe) == xs.contains(&probe)
    }
}

quickcheck::quickcheck! {
    fn failed_insert_changes_nothing(xs: Vec<i32>, word: String) -> bool {
        let mut tree = Tree::try_from_keys(xs.iter().map(|x| Key::Int(i64::from(*x)))).unwrap();
        let before = tree.to_string();

        let rejected = tree.insert(Key::Text(word)).is_err();

        rejected == !xs.is_empty() && (xs.is_empty() || tree.to_string() == before)
    }
}
