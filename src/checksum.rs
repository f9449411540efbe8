use crate::codec::CNP_LENGTH;

const CHECKSUM_WEIGHTS: [u32; CNP_LENGTH - 1] = [2, 7, 9, 1, 4, 6, 3, 5, 8, 2, 7, 9];

/// Check digit implied by the first 12 digits: their weighted sum
/// modulo 11, with a result of 10 remapped to 1. A candidate is
/// accepted only when this equals the stored 13th digit.
pub(crate) fn check_digit(digits: &[u8; CNP_LENGTH]) -> u8 {
    let weighted_sum: u32 = digits
        .iter()
        .zip(CHECKSUM_WEIGHTS)
        .map(|(&digit, weight)| u32::from(digit) * weight)
        .sum();

    match weighted_sum % 11 {
        10 => 1,
        digit => digit as u8,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn digits(input: &str) -> [u8; CNP_LENGTH] {
        let mut digits = [0u8; CNP_LENGTH];
        for (i, c) in input.chars().enumerate() {
            digits[i] = c.to_digit(10).unwrap() as u8;
        }
        digits
    }

    #[test]
    fn computes_the_stored_check_digit_for_issued_numbers() {
        let cnps = vec![
            "5110102441483",
            "6140101070075",
            "3970908055828",
            "2970702435244",
            "1850611212751",
        ];
        for cnp in cnps {
            let digits = digits(cnp);
            assert_eq!(check_digit(&digits), digits[12], "wrong check digit for {}", cnp);
        }
    }

    #[test]
    fn remaps_a_remainder_of_ten_to_one() {
        // each of these stems sums to 10 mod 11
        let cnps = vec!["5110102440061", "5110102440141", "5110102440221"];
        for cnp in cnps {
            assert_eq!(check_digit(&digits(cnp)), 1, "no remap for {}", cnp);
        }
    }

    #[test]
    fn flags_a_corrupted_check_digit() {
        let digits = digits("5110102441484");
        assert_ne!(check_digit(&digits), digits[12]);
    }
}
