#![allow(unused_imports)]
use {
    ::std::{
        panic,
        sync::{
            atomic::{AtomicBool, AtomicUsize, Ordering},
            Arc,
            Mutex,
        },
        thread,
    },
    ::testresult::TestResult,
    crate::{
        spawn::SpawnFn,
        *,
    },
};

#[test]
fn basic ()
{
    let generator = Gen::new(|co| {
        co.yield_(42_u8);
        co.yield_(0);
        co.yield_(27);
    });
    assert_it_eq!(generator, [42, 0, 27]);
}

#[test]
fn yields_then_none_forever ()
{
    let mut generator = Gen::new(|co| {
        co.yield_(1);
        co.yield_(2);
        co.yield_(3);
    });
    assert_eq!(generator.next(), Some(1));
    assert_eq!(generator.next(), Some(2));
    assert_eq!(generator.next(), Some(3));
    assert_eq!(generator.next(), None);
    assert_eq!(generator.next(), None);
    assert!(generator.is_complete());
}

#[test]
fn exactly_n_values ()
{
    for n in 0 .. 16_usize {
        let mut generator = Gen::new(move |co| {
            for i in 0 .. n {
                co.yield_(i);
            }
        });
        for i in 0 .. n {
            assert_eq!(generator.next(), Some(i), "n = {}", n);
        }
        for _ in 0 .. 3 {
            assert_eq!(generator.next(), None, "n = {}", n);
        }
    }
}

#[test]
fn never_yields ()
{
    let mut generator = Gen::<()>::new(|_| {});
    assert!(generator.is_complete().not());
    assert_eq!(generator.next(), None);
    assert!(generator.is_complete());
}

#[test]
fn range ()
{
    fn range (start: u8, end: u8)
      -> Gen<u8>
    {
        Gen::new(move |co| {
            let mut current = start;
            while current < end {
                co.yield_(current);
                current += 1;
            }
        })
    }

    assert_it_eq!(range(2, 8), (2 .. 8).collect::<Vec<_>>());
}

#[test]
fn infinite ()
{
    let naturals = Gen::new(|co| {
        let mut n = 0_u64;
        loop {
            co.yield_(n);
            n += 1;
        }
    });
    assert_it_eq!(naturals.take(1000), (0 .. 1000).collect::<Vec<_>>());
}

#[test]
fn independent_instances ()
{
    let counter = || Gen::new(|co| {
        let mut n = 0_u32;
        loop {
            n += 1;
            co.yield_(n);
        }
    });
    let mut a = counter();
    let mut b = counter();
    assert_eq!(a.next(), Some(1));
    assert_eq!(a.next(), Some(2));
    assert_eq!(a.next(), Some(3));
    assert_eq!(b.next(), Some(1));
    assert_eq!(a.next(), Some(4));
    assert_eq!(b.next(), Some(2));
}

#[test]
fn argument_passing_scenario ()
{
    let mut generator = ArgGen::new(|co| {
        let a = co.yield_(10);
        let _ = co.yield_(a + 1);
    });
    assert_eq!(generator.next(5), Some(10));
    assert_eq!(generator.next(100), Some(101));
    assert_eq!(generator.next(0), None);
    assert_eq!(generator.next(0), None);
}

#[test]
fn resume_args ()
{
    let mut coroutine = Coroutine::new(|co| {
        let mut resume_args = vec![];
        let mut arg: i32 = co.yield_(0);
        while arg != 0 {
            resume_args.push(arg);
            arg = co.yield_(arg);
        }
        resume_args
    });
    let mut resume = |arg| match coroutine.resume(arg) {
        | GeneratorState::Yielded(yielded_value) => {
            assert_eq!(yielded_value, arg);
            None
        },
        | GeneratorState::Returned(ret) => {
            assert_eq!(arg, 0);
            Some(ret)
        },
        | GeneratorState::Exhausted => panic!("exhausted too early"),
    };

    // The first argument is dropped: the body yields `0` whatever it is.
    assert_eq!(resume(0), None);
    resume(12);
    resume(17);
    resume(47);
    assert_eq!(resume(0), Some(vec![12, 17, 47]));
}

#[test]
fn kth_argument_is_returned_by_previous_yield ()
{
    let mut coroutine = Coroutine::new(|co| {
        let mut received = vec![];
        for i in 0 .. 5 {
            received.push(co.yield_(i));
        }
        received
    });
    let args = [100, 101, 102, 103, 104, 105];
    let mut yielded = vec![];
    let mut returned = None;
    for &arg in &args {
        match coroutine.resume(arg) {
            | GeneratorState::Yielded(value) => yielded.push(value),
            | GeneratorState::Returned(value) => returned = Some(value),
            | GeneratorState::Exhausted => unreachable!(),
        }
    }
    assert_eq!(yielded, [0, 1, 2, 3, 4]);
    // The first argument (100) is never observed.
    assert_eq!(returned, Some(vec![101, 102, 103, 104, 105]));
    assert_eq!(coroutine.resume(106), GeneratorState::Exhausted);
}

#[test]
fn return_value_is_handed_out_once ()
{
    let mut coroutine = Coroutine::<u8, &str>::new(|co| {
        co.yield_(1);
        "Boom!"
    });
    assert_eq!(coroutine.resume(()), GeneratorState::Yielded(1));
    assert_eq!(coroutine.resume(()), GeneratorState::Returned("Boom!"));
    assert_eq!(coroutine.resume(()), GeneratorState::Exhausted);
    assert_eq!(coroutine.resume(()), GeneratorState::Exhausted);
}

#[test]
fn body_waits_for_first_resume ()
{
    let started = Arc::new(AtomicBool::new(false));
    let mut generator = Gen::new({
        let started = Arc::clone(&started);
        move |co| {
            started.store(true, Ordering::SeqCst);
            co.yield_(());
        }
    });
    thread::sleep(::std::time::Duration::from_millis(20));
    assert!(started.load(Ordering::SeqCst).not());
    assert_eq!(generator.next(), Some(()));
    assert!(started.load(Ordering::SeqCst));
}

#[test]
fn strict_alternation ()
{
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut generator = Gen::new({
        let log = Arc::clone(&log);
        move |co| {
            for i in 0 .. 3 {
                log.lock().unwrap().push(format!("body {}", i));
                co.yield_(i);
            }
            log.lock().unwrap().push("body done".to_owned());
        }
    });
    while let Some(i) = generator.next() {
        log.lock().unwrap().push(format!("caller {}", i));
    }
    assert_eq!(
        *log.lock().unwrap(),
        [
            "body 0", "caller 0",
            "body 1", "caller 1",
            "body 2", "caller 2",
            "body done",
        ],
    );
}

#[test]
fn body_panic_resumes_on_caller ()
{
    let mut generator = Gen::new(|co| {
        co.yield_(1);
        panic!("boom");
    });
    assert_eq!(generator.next(), Some(1));
    let payload =
        panic::catch_unwind(panic::AssertUnwindSafe(|| generator.next()))
            .unwrap_err()
    ;
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"boom"));
    assert!(generator.is_complete());
    assert_eq!(generator.next(), None);
}

#[test]
#[should_panic(expected = "failed in body")]
fn body_panic_propagates ()
{
    let mut coroutine = Coroutine::<(), ()>::new(|_| {
        panic!("failed in body");
    });
    let _ = coroutine.resume(());
}

/// A substrate whose threads can be joined, to observe when bodies finish.
#[derive(Default)]
struct Joinable {
    handles: Mutex<Vec<thread::JoinHandle<()>>>,
}

impl Spawn for Joinable {
    fn spawn (self: &'_ Self, task: Task)
      -> Result<(), SpawnError>
    {
        let handle = thread::Builder::new().spawn(move || task.run())?;
        self.handles.lock().unwrap().push(handle);
        Ok(())
    }
}

impl Joinable {
    fn join_all (self: &'_ Self)
    {
        for handle in self.handles.lock().unwrap().drain(..) {
            handle.join().unwrap();
        }
    }
}

#[test]
fn dropped_before_start_never_runs () -> TestResult
{
    let spawner = Joinable::default();
    let ran = Arc::new(AtomicBool::new(false));
    let generator = Builder::new().spawner(&spawner).generator({
        let ran = Arc::clone(&ran);
        move |co| {
            ran.store(true, Ordering::SeqCst);
            co.yield_(());
        }
    })?;
    drop(generator);
    spawner.join_all();
    assert!(ran.load(Ordering::SeqCst).not());
    Ok(())
}

#[test]
fn abandoned_body_never_resumes ()
{
    let resumed = Arc::new(AtomicBool::new(false));
    let mut generator = Gen::new({
        let resumed = Arc::clone(&resumed);
        move |co| {
            co.yield_(1);
            resumed.store(true, Ordering::SeqCst);
            co.yield_(2);
        }
    });
    assert_eq!(generator.next(), Some(1));
    drop(generator);
    thread::sleep(::std::time::Duration::from_millis(50));
    assert!(resumed.load(Ordering::SeqCst).not());
}

/// Reruns this very test in a child process, where the `Task` gets dropped.
#[test]
fn dropped_task_aborts_the_process () -> TestResult
{
    const IN_CHILD: &str = "THREAD_GEN_DROPPED_TASK_CHILD";

    if ::std::env::var_os(IN_CHILD).is_some() {
        let mut generator =
            Builder::new()
                .spawner(SpawnFn(|task: Task| {
                    drop(task);
                    Ok::<(), SpawnError>(())
                }))
                .generator(|co| co.yield_(()))?
        ;
        let _ = generator.next();
        unreachable!("resuming a dropped task must abort");
    }

    let output =
        ::std::process::Command::new(::std::env::current_exe()?)
            .args([
                "--exact",
                "tests::dropped_task_aborts_the_process",
                "--nocapture",
                "--test-threads=1",
            ])
            .env(IN_CHILD, "1")
            .output()?
    ;
    assert!(output.status.success().not());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("fatal runtime error"), "stderr: {}", stderr);
    Ok(())
}

#[test]
fn completed_body_releases_its_context () -> TestResult
{
    let spawner = Joinable::default();
    let generator = Builder::new()
        .spawner(&spawner)
        .generator(|co| (0 .. 3).for_each(|i| co.yield_(i)))?
    ;
    assert_it_eq!(generator, [0, 1, 2]);
    spawner.join_all();
    Ok(())
}

#[test]
fn custom_spawner_is_used () -> TestResult
{
    let spawned = Arc::new(AtomicUsize::new(0));
    let spawner = SpawnFn({
        let spawned = Arc::clone(&spawned);
        move |task: Task| {
            spawned.fetch_add(1, Ordering::SeqCst);
            let _ = thread::spawn(move || task.run());
            Ok::<(), SpawnError>(())
        }
    });
    let builder = Builder::new().spawner(Arc::new(spawner));
    let a = builder.generator(|co| co.yield_('a'))?;
    let b = builder.arg_generator(|co: Yielder<'_, char, char>| {
        let c = co.yield_('b');
        co.yield_(c);
    })?;
    assert_eq!(spawned.load(Ordering::SeqCst), 2);
    assert_it_eq!(a, ['a']);
    let mut b = b;
    assert_eq!(b.next('x'), Some('b'));
    assert_eq!(b.next('y'), Some('y'));
    assert_eq!(b.next('z'), None);
    Ok(())
}

#[test]
fn rejected_spawn_is_an_error ()
{
    let spawner = SpawnFn(|_: Task| Err::<(), _>(SpawnError::rejected("pool is full")));
    let err =
        Builder::new()
            .spawner(spawner)
            .generator(|co| co.yield_(0))
            .unwrap_err()
    ;
    assert!(matches!(err, SpawnError::Rejected(_)));
    assert_eq!(
        err.to_string(),
        "the executor rejected the generator body: pool is full",
    );
}

#[test]
fn builder_names_the_body_thread () -> TestResult
{
    let builder = Builder::new().name("producer").stack_size(256 * 1024);
    let mut coroutine = builder.coroutine(|co| {
        co.yield_(thread::current().name().map(str::to_owned));
    })?;
    assert_eq!(coroutine.name(), Some("producer"));
    assert_eq!(
        coroutine.resume(()),
        GeneratorState::Yielded(Some("producer".to_owned())),
    );
    assert_eq!(coroutine.resume(()), GeneratorState::Complete);
    Ok(())
}

#[test]
fn generator_can_move_across_threads ()
{
    let mut generator = Gen::new(|co| (1 ..= 8).for_each(|i| co.yield_(i)));
    assert_eq!(generator.next(), Some(1));
    let rest =
        thread::spawn(move || generator.collect::<Vec<_>>())
            .join()
            .unwrap()
    ;
    assert_eq!(rest, (2 ..= 8).collect::<Vec<_>>());
}

#[test]
fn generator_trait_objects ()
{
    let mut generators: Vec<Box<dyn Generator<Yield = u32, Return = ()>>> = vec![
        Box::new(Gen::new(|co| co.yield_(1))),
        Box::new(Coroutine::new(|co: Yielder<'_, u32>| co.yield_(2))),
    ];
    let yielded: Vec<u32> =
        generators
            .iter_mut()
            .flat_map(|generator| generator.gen_into_iter())
            .collect()
    ;
    assert_eq!(yielded, [1, 2]);
}

macro_rules! assert_it_eq {(
    $left:expr, $right:expr $(, $($msg:expr $(,)?)?)?
) => (
    assert_eq!(
        $left.into_iter().collect::<Vec<_>>(),
        $right,
        $($($msg ,)?)?
    )
)}
use assert_it_eq;

use ::core::ops::Not as _;
