fn main ()
{
    use ::thread_gen::prelude::*;

    /// Keeps a running average of the samples it is resumed with.
    #[generator(yield(f64), resume(f64))]
    fn running_average () -> usize
    {
        let (mut count, mut sum) = (0_usize, 0.0);
        let mut sample = yield_!(0.0);
        while sample.is_finite() {
            count += 1;
            sum += sample;
            sample = yield_!(sum / count as f64);
        }
        count
    }

    let mut average = running_average();
    // Nothing has been averaged yet: the first argument is dropped.
    assert_eq!(average.resume(f64::NAN), GeneratorState::Yielded(0.0));
    assert_eq!(average.resume(2.0), GeneratorState::Yielded(2.0));
    assert_eq!(average.resume(4.0), GeneratorState::Yielded(3.0));
    assert_eq!(average.resume(9.0), GeneratorState::Yielded(5.0));
    assert_eq!(average.resume(f64::INFINITY), GeneratorState::Returned(3));
    assert!(average.is_complete());
}
