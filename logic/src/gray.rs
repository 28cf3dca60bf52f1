/// Convert a two bit binary count into its Gray code.
///
/// Adjacent counts differ in exactly one bit, so a single step only ever toggles one line.
///
/// ```md
///  Cnt  bin  gray
///  ---:-----:----
///   0 : 0 0 : 0 0
///   1 : 0 1 : 0 1
///   2 : 1 0 : 1 1
///   3 : 1 1 : 1 0
/// ```
///```rust
/// use quadrature_rescale_logic::gray::to_gray;
/// assert_eq!(to_gray(2), 0b11);
/// // Only the low two bits take part.
/// assert_eq!(to_gray(6), 0b11);
///```
pub const fn to_gray(binary: u8) -> u8 {
    (binary & 0b11) ^ ((binary >> 1) & 0b01)
}

#[cfg(test)]
mod tests {
    use super::to_gray;

    #[test]
    fn truth_table() {
        assert_eq!(to_gray(0), 0b00);
        assert_eq!(to_gray(1), 0b01);
        assert_eq!(to_gray(2), 0b11);
        assert_eq!(to_gray(3), 0b10);
    }

    #[test]
    fn bijective_over_two_bits() {
        let mut seen = [false; 4];
        for count in 0..4 {
            seen[usize::from(to_gray(count))] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn neighbours_differ_by_one_bit() {
        for count in 0..4u8 {
            let next = (count + 1) & 0b11;
            assert_eq!((to_gray(count) ^ to_gray(next)).count_ones(), 1);
        }
    }

    #[test]
    fn two_bit_code_is_its_own_inverse() {
        //With only two bits the swap of 2 and 3 undoes itself.
        for count in 0..4 {
            assert_eq!(to_gray(to_gray(count)), count);
        }
    }
}
