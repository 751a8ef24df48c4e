//! Comprehensive tests for hobbit ordering and sorting

use bestiary_models::{by_height, by_height_then_weight, sorted_by, Hobbit};

fn roster() -> Vec<Hobbit> {
    vec![
        Hobbit::new("Tom", 120, 109.90),
        Hobbit::new("Heiss", 115, 89.78),
        Hobbit::new("Timy", 120, 101.12),
        Hobbit::new("Tomy", 122, 123.22),
        Hobbit::new("Jossu", 127, 140.23),
    ]
}

fn names(hobbits: &[Hobbit]) -> Vec<&str> {
    hobbits.iter().map(|h| h.name.as_str()).collect()
}

mod composite_sort_tests {
    use super::*;

    #[test]
    fn test_height_then_weight_order() {
        let sorted = sorted_by(&roster(), by_height_then_weight);

        // Heiss is shortest; Timy and Tom share height 120 and order by
        // ascending weight; Tomy and Jossu follow by height.
        assert_eq!(names(&sorted), ["Heiss", "Timy", "Tom", "Tomy", "Jossu"]);
    }

    #[test]
    fn test_rendered_sequence_before_and_after_sorting() {
        let hobbits = roster();

        let before: Vec<String> = hobbits.iter().map(|h| h.to_string()).collect();
        assert_eq!(
            before,
            [
                "Hobbit [nombre=Tom, altura=120, peso=109.9]",
                "Hobbit [nombre=Heiss, altura=115, peso=89.78]",
                "Hobbit [nombre=Timy, altura=120, peso=101.12]",
                "Hobbit [nombre=Tomy, altura=122, peso=123.22]",
                "Hobbit [nombre=Jossu, altura=127, peso=140.23]",
            ]
        );

        let after: Vec<String> = sorted_by(&hobbits, by_height_then_weight)
            .iter()
            .map(|h| h.to_string())
            .collect();
        assert_eq!(
            after,
            [
                "Hobbit [nombre=Heiss, altura=115, peso=89.78]",
                "Hobbit [nombre=Timy, altura=120, peso=101.12]",
                "Hobbit [nombre=Tom, altura=120, peso=109.9]",
                "Hobbit [nombre=Tomy, altura=122, peso=123.22]",
                "Hobbit [nombre=Jossu, altura=127, peso=140.23]",
            ]
        );
    }
}

mod stability_tests {
    use super::*;

    #[test]
    fn test_by_height_keeps_input_order_among_equal_heights() {
        let sorted = sorted_by(&roster(), by_height);

        // Tom was inserted before Timy; both are 120 tall, so the heavier
        // Tom stays first under the height-only ordering.
        assert_eq!(names(&sorted), ["Heiss", "Tom", "Timy", "Tomy", "Jossu"]);
    }

    #[test]
    fn test_already_sorted_input_is_unchanged() {
        let sorted_once = sorted_by(&roster(), by_height_then_weight);
        let sorted_twice = sorted_by(&sorted_once, by_height_then_weight);

        assert_eq!(names(&sorted_once), names(&sorted_twice));
    }
}

mod natural_ordering_tests {
    use super::*;

    #[test]
    fn test_sorting_by_natural_ordering_is_alphabetical() {
        let sorted = sorted_by(&roster(), Hobbit::cmp);

        assert_eq!(names(&sorted), ["Heiss", "Jossu", "Timy", "Tom", "Tomy"]);
    }

    #[test]
    fn test_natural_ordering_is_case_sensitive() {
        // Uppercase code points order before lowercase
        let a = Hobbit::new("tom", 120, 109.90);
        let b = Hobbit::new("Tom", 120, 109.90);
        let sorted = sorted_by(&[a, b], Hobbit::cmp);

        assert_eq!(names(&sorted), ["Tom", "tom"]);
    }
}
