#[cfg(test)]
mod tests {

    use std::{cell::RefCell, rc::Rc};

    use tether::{Binder, Linker, NegateTransformer, Observable, ObservableCell};

    static TEST_LEFT_NAME: &str = "test_left";
    static TEST_RIGHT_NAME: &str = "test_right";

    fn number_cells() -> (ObservableCell<i32>, ObservableCell<String>) {
        (
            ObservableCell::new(5, TEST_LEFT_NAME),
            ObservableCell::new(String::from("7"), TEST_RIGHT_NAME),
        )
    }

    fn number_binder(left: &ObservableCell<i32>, right: &ObservableCell<String>) -> Binder {
        Binder::new(
            left,
            right,
            |n| n.to_string(),
            |s: String| s.parse().unwrap_or(0),
        )
    }

    #[test]
    fn binder_seeds_from_the_right_side() {
        let (left, right) = number_cells();

        let _binder = number_binder(&left, &right);

        assert_eq!(left.get(), 7);
        assert_eq!(right.get(), "7");
    }

    #[test]
    fn binder_propagates_both_ways() {
        let (left, right) = number_cells();
        let _binder = number_binder(&left, &right);

        left.set(42);
        assert_eq!(right.get(), "42");

        right.set(String::from("100"));
        assert_eq!(left.get(), 100);
    }

    #[test]
    fn binder_notifies_the_far_sides_other_subscribers() {
        let (left, right) = number_cells();
        let _binder = number_binder(&left, &right);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = Rc::clone(&seen);
        right.register(move |value| seen_clone.borrow_mut().push(value));

        left.set(42);
        assert_eq!(*seen.borrow(), vec![String::from("42")]);
    }

    #[test]
    fn binder_guard_stops_feedback_from_non_inverse_transforms() {
        let (left, right) = number_cells();

        let _binder = Binder::new(
            &left,
            &right,
            |_| String::from("X"),
            |_: String| 0,
        );
        assert_eq!(left.get(), 0);
        assert_eq!(right.get(), "X");

        // Must terminate, and the echo must not overwrite the origin.
        left.set(1);
        assert_eq!(left.get(), 1);
        assert_eq!(right.get(), "X");

        right.set(String::from("Y"));
        assert_eq!(right.get(), "Y");
        assert_eq!(left.get(), 0);
    }

    #[test]
    fn dropping_the_binder_tears_the_link_down() {
        let (left, right) = number_cells();

        {
            let _binder = number_binder(&left, &right);
            left.set(42);
            assert_eq!(right.get(), "42");
        }

        assert_eq!(left.subscriber_count(), 0);
        assert_eq!(right.subscriber_count(), 0);

        left.set(1);
        assert_eq!(right.get(), "42");

        right.set(String::from("100"));
        assert_eq!(left.get(), 1);
    }

    #[test]
    fn disposing_the_binder_tears_the_link_down() {
        let (left, right) = number_cells();
        let binder = number_binder(&left, &right);

        binder.dispose();

        assert_eq!(left.subscriber_count(), 0);
        assert_eq!(right.subscriber_count(), 0);

        left.set(42);
        assert_eq!(right.get(), "7");
    }

    #[test]
    fn binder_with_transformer() {
        let left = ObservableCell::new(false, TEST_LEFT_NAME);
        let right = ObservableCell::new(false, TEST_RIGHT_NAME);

        let _binder = Binder::with_transformer(&left, &right, NegateTransformer);

        // Right was authoritative: left = !false, right = !true.
        assert!(left.get());
        assert!(!right.get());

        left.set(false);
        assert!(right.get());

        right.set(false);
        assert!(left.get());
    }

    #[test]
    fn binder_direct() {
        let left = ObservableCell::new(1u8, TEST_LEFT_NAME);
        let right = ObservableCell::new(2u8, TEST_RIGHT_NAME);

        let _binder = Binder::direct(&left, &right);
        assert_eq!(left.get(), 2);
        assert_eq!(right.get(), 2);

        left.set(9);
        assert_eq!(right.get(), 9);
    }

    #[test]
    fn linker_propagates_left_to_right_only() {
        let (left, right) = number_cells();

        let _linker = Linker::new(&left, &right, |n: i32| n.to_string());
        assert_eq!(right.get(), "5");
        assert_eq!(left.get(), 5);

        left.set(42);
        assert_eq!(right.get(), "42");

        right.set(String::from("100"));
        assert_eq!(left.get(), 42);
        assert_eq!(right.get(), "100");
    }

    #[test]
    fn dropping_the_linker_tears_the_link_down() {
        let (left, right) = number_cells();

        {
            let _linker = Linker::new(&left, &right, |n: i32| n.to_string());
        }

        assert_eq!(left.subscriber_count(), 0);
        assert_eq!(right.subscriber_count(), 0);

        left.set(42);
        assert_eq!(right.get(), "5");
    }

    #[test]
    fn connect_seeds_and_follows_the_source() {
        let label = ObservableCell::new(String::new(), TEST_LEFT_NAME);
        let model = ObservableCell::new(5, TEST_RIGHT_NAME);

        let _link = label.connect(&model, |n: i32| n.to_string());
        assert_eq!(label.get(), "5");

        model.set(42);
        assert_eq!(label.get(), "42");

        // One-way: the target never writes back.
        label.set(String::from("edited"));
        assert_eq!(model.get(), 42);
    }

    #[test]
    fn bind_treats_self_as_authoritative() {
        let field = ObservableCell::new(String::from("300"), TEST_LEFT_NAME);
        let model = ObservableCell::new(5, TEST_RIGHT_NAME);

        let _link = field.bind(
            &model,
            |n: i32| n.to_string(),
            |s: String| s.parse().unwrap_or(0),
        );

        assert_eq!(model.get(), 300);
        assert_eq!(field.get(), "300");

        model.set(42);
        assert_eq!(field.get(), "42");

        field.set(String::from("100"));
        assert_eq!(model.get(), 100);
    }
}
