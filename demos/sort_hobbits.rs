//! Prints a handful of hobbits in insertion order, then again sorted by
//! height and weight, and finishes with a pet that gets renamed under the
//! validation rule.

use anyhow::Result;
use bestiary_models::{by_height_then_weight, sorted_by, Hobbit, Pet};

fn main() -> Result<()> {
    let hobbits = vec![
        Hobbit::new("Tom", 120, 109.90),
        Hobbit::new("Heiss", 115, 89.78),
        Hobbit::new("Timy", 120, 101.12),
        Hobbit::new("Tomy", 122, 123.22),
        Hobbit::new("Jossu", 127, 140.23),
    ];

    for hobbit in &hobbits {
        println!("{hobbit}");
    }
    println!("================");
    for hobbit in sorted_by(&hobbits, by_height_then_weight) {
        println!("{hobbit}");
    }

    let mut pet = Pet::new("El gato con botas", false, None);
    println!("{pet}");

    pet.set_name("Botas")?;
    println!("{pet}");

    Ok(())
}
