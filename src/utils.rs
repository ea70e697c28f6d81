pub(crate) const fn div_ceil(lhs: usize, rhs: usize) -> usize {
    let d = lhs / rhs;
    if lhs % rhs == 0 {
        d
    } else {
        d + 1
    }
}

#[cfg(test)]
mod tests {
    use super::div_ceil;

    #[test]
    fn div_ceil_works() {
        assert_eq!(div_ceil(48, 8), 6);
        assert_eq!(div_ceil(49, 8), 7);
        assert_eq!(div_ceil(1, 8), 1);
        assert_eq!(div_ceil(16, 2), 8);
    }
}
