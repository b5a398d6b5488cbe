/// Steps through `all`, wrapping at both ends.
///
/// A value missing from `all` snaps to the first choice.
pub fn step<T: Copy + PartialEq>(current: T, all: &[T], forward: bool) -> T {
    let len = all.len();
    let Some(pos) = all.iter().position(|x| *x == current) else {
        return all.first().copied().unwrap_or(current);
    };
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    all[next]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_wraps_both_ways() {
        let all = [7u16, 14, 30];
        assert_eq!(step(30, &all, true), 7);
        assert_eq!(step(7, &all, false), 30);
        assert_eq!(step(14, &all, true), 30);
        assert_eq!(step(45, &all, true), 7);
    }

    #[test]
    fn empty_choices_keep_current() {
        assert_eq!(step(3u8, &[], true), 3);
    }
}
