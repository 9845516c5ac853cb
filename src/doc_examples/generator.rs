fn main ()
{
    use ::thread_gen::prelude::*;

    /// Greedily wraps `text` into lines of at most `width` bytes, and returns
    /// how many lines it produced.
    #[generator(yield(String))]
    fn wrap (text: &'static str, width: usize) -> usize
    {
        let mut line = String::new();
        let mut count = 0;
        for word in text.split_whitespace() {
            if line.is_empty().not() && line.len() + 1 + word.len() > width {
                yield_!(::core::mem::take(&mut line));
                count += 1;
            }
            if line.is_empty().not() {
                line.push(' ');
            }
            line.push_str(word);
        }
        if line.is_empty().not() {
            yield_!(line);
            count += 1;
        }
        count
    }

    let mut lines = wrap("the quick brown fox jumps over the lazy dog", 10);
    let mut wrapped = vec![];
    let count = loop {
        match lines.resume(()) {
            | GeneratorState::Yielded(line) => wrapped.push(line),
            | GeneratorState::Returned(count) => break count,
            | GeneratorState::Exhausted => unreachable!(),
        }
    };
    assert_eq!(wrapped, ["the quick", "brown fox", "jumps over", "the lazy", "dog"]);
    assert_eq!(count, wrapped.len());
    assert!(lines.is_complete());
    assert_eq!(lines.resume(()), GeneratorState::Exhausted);
}

use ::core::ops::Not as _;
