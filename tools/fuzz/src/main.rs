use afl::fuzz;
use cnp_codec::{Cnp, INVALID_CNP, INVALID_DATE};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let input = std::str::from_utf8(bytes).ok()?;

    let mut cnp = Cnp::new(input);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Valid: {:?}", cnp.is_valid());
        println!("Error: {:?}", cnp.error());
        println!("Facts: {:?}", cnp.facts());
    }

    check_coherence(&cnp, input);

    // reseeding with the same candidate must reach the same outcome
    let was_valid = cnp.is_valid();
    cnp.set(input);
    assert_eq!(cnp.is_valid(), was_valid);
    check_coherence(&cnp, input);

    Some(())
}

// The accessors must agree with the validity flag in both directions,
// no matter what the candidate looks like.
fn check_coherence(cnp: &Cnp, input: &str) {
    if cnp.is_valid() {
        assert_eq!(cnp.to_string(), input);
        assert!(cnp.error().is_none());
        assert!(cnp.birth_date().is_some());
        assert!(cnp.birth_place().is_some());
        assert_eq!(cnp.serial_number().len(), 3);
        assert_ne!(cnp.format_birth_date("YYYY-MM-DD"), INVALID_DATE);

        let facts = cnp.facts().expect("accepted candidates expose facts");
        assert_eq!(facts.cnp, input);
        assert_eq!(facts.serial_number, cnp.serial_number());
    } else {
        assert!(cnp.error().is_some());
        assert_eq!(cnp.to_string(), INVALID_CNP);
        assert_eq!(cnp.format_birth_date("YYYY-MM-DD"), INVALID_DATE);
        assert!(cnp.birth_date().is_none());
        assert!(cnp.birth_place().is_none());
        assert!(cnp.gender().is_none());
        assert!(!cnp.has_identity_card());
        assert!(cnp.serial_number().is_empty());
        assert!(cnp.facts().is_none());
    }
}
