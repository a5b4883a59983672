//! Loops driven by a predicate computation.
//!
//! Every loop is a single [`Monad::tail_rec_m`] call, so iteration count is
//! not limited by stack depth. A predicate that never yields the stopping
//! value loops forever; guarding against that is the caller's concern.
//!
//! A failing predicate or body computation (`None`, `Err`, ...) ends the loop
//! and becomes its result.

use std::ops::ControlFlow;

use super::lifted::not_m;
use crate::typeclass::{Functor, Monad};

/// Runs `body` for as long as `predicate` yields `true`, checking first.
///
/// The body runs zero times when the predicate starts out `false`.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::while_m;
/// use std::cell::Cell;
///
/// let remaining = Cell::new(3);
/// let finished: Option<()> = while_m(
///     || Some(remaining.get() > 0),
///     || Some(remaining.set(remaining.get() - 1)),
/// );
/// assert_eq!(finished, Some(()));
/// assert_eq!(remaining.get(), 0);
/// ```
pub fn while_m<M, N, P, B>(mut predicate: P, mut body: B) -> M::WithType<()>
where
    M: Monad<Inner = bool, WithType<bool> = M>,
    P: FnMut() -> M,
    B: FnMut() -> N,
    N: Functor<WithType<ControlFlow<()>> = M::WithType<ControlFlow<()>>>,
{
    M::tail_rec_m::<(), (), _>((), |()| {
        predicate().flat_map::<ControlFlow<()>, _>(|keep_going| {
            if keep_going {
                body().fmap::<ControlFlow<()>, _>(|_| ControlFlow::Continue(()))
            } else {
                M::pure::<ControlFlow<()>>(ControlFlow::Break(()))
            }
        })
    })
}

/// Runs `body` for as long as `predicate` yields `false`, checking first.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::until_m;
/// use std::cell::RefCell;
///
/// let pending = RefCell::new(vec!["c", "b", "a"]);
/// let processed = RefCell::new(Vec::new());
/// let finished: Result<(), String> = until_m(
///     || Ok(pending.borrow().is_empty()),
///     || -> Result<(), String> {
///         let job = pending.borrow_mut().pop().ok_or("no job")?;
///         processed.borrow_mut().push(job);
///         Ok(())
///     },
/// );
/// assert_eq!(finished, Ok(()));
/// assert_eq!(*processed.borrow(), vec!["a", "b", "c"]);
/// ```
pub fn until_m<M, N, P, B>(mut predicate: P, body: B) -> M::WithType<()>
where
    M: Monad<Inner = bool, WithType<bool> = M>,
    P: FnMut() -> M,
    B: FnMut() -> N,
    N: Functor<WithType<ControlFlow<()>> = M::WithType<ControlFlow<()>>>,
{
    while_m::<M, N, _, B>(|| not_m(predicate()), body)
}

/// Runs `body` at least once, then again for as long as `predicate` yields
/// `true`. Returns the result of the last `body` run.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::do_while_m;
/// use std::cell::Cell;
///
/// let attempts = Cell::new(0);
/// let last: Result<u32, String> = do_while_m(
///     || Ok(attempts.get() < 3),
///     || {
///         attempts.set(attempts.get() + 1);
///         Ok(attempts.get() * 10)
///     },
/// );
/// assert_eq!(last, Ok(30));
/// ```
pub fn do_while_m<M, A, N, P, B>(mut predicate: P, mut body: B) -> M::WithType<A>
where
    M: Monad<Inner = bool, WithType<bool> = M>,
    P: FnMut() -> M,
    B: FnMut() -> N,
    N: Monad<Inner = A, WithType<ControlFlow<A>> = M::WithType<ControlFlow<A>>>,
{
    M::tail_rec_m::<(), A, _>((), |()| {
        body().flat_map::<ControlFlow<A>, _>(|latest| {
            predicate().fmap::<ControlFlow<A>, _>(move |again| {
                if again {
                    ControlFlow::Continue(())
                } else {
                    ControlFlow::Break(latest)
                }
            })
        })
    })
}

/// Runs `body` at least once, then again for as long as `predicate` yields
/// `false`. Returns the result of the last `body` run.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::do_until_m;
/// use lambars_cond::typeclass::Identity;
/// use std::cell::Cell;
///
/// let seed = Cell::new(27_u64);
/// let steps = Cell::new(0);
/// let reached = do_until_m(
///     || Identity(seed.get() == 1),
///     || {
///         let next = if seed.get() % 2 == 0 { seed.get() / 2 } else { 3 * seed.get() + 1 };
///         seed.set(next);
///         steps.set(steps.get() + 1);
///         Identity(next)
///     },
/// );
/// assert_eq!(reached, Identity(1));
/// assert_eq!(steps.get(), 111);
/// ```
pub fn do_until_m<M, A, N, P, B>(mut predicate: P, body: B) -> M::WithType<A>
where
    M: Monad<Inner = bool, WithType<bool> = M>,
    P: FnMut() -> M,
    B: FnMut() -> N,
    N: Monad<Inner = A, WithType<ControlFlow<A>> = M::WithType<ControlFlow<A>>>,
{
    do_while_m::<M, A, N, _, B>(|| not_m(predicate()), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Identity;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn while_m_skips_body_when_predicate_starts_false() {
        let runs = Cell::new(0);
        let result = while_m(
            || Identity(false),
            || Identity(runs.set(runs.get() + 1)),
        );
        assert_eq!(result, Identity(()));
        assert_eq!(runs.get(), 0);
    }

    #[rstest]
    fn while_m_checks_predicate_before_each_run() {
        let counter = Cell::new(0);
        let checks = Cell::new(0);
        let _ = while_m(
            || {
                checks.set(checks.get() + 1);
                Some(counter.get() < 5)
            },
            || Some(counter.set(counter.get() + 1)),
        );
        assert_eq!(counter.get(), 5);
        assert_eq!(checks.get(), 6);
    }

    #[rstest]
    fn while_m_stops_on_failed_body() {
        let counter = Cell::new(0);
        let result: Result<(), String> = while_m(
            || Ok(true),
            || {
                counter.set(counter.get() + 1);
                if counter.get() == 4 {
                    Err(format!("gave up after {}", counter.get()))
                } else {
                    Ok(())
                }
            },
        );
        assert_eq!(result, Err("gave up after 4".to_owned()));
    }

    #[rstest]
    fn while_m_runs_a_million_iterations() {
        let counter = Cell::new(0_u32);
        let _ = while_m(
            || Identity(counter.get() < 1_000_000),
            || Identity(counter.set(counter.get() + 1)),
        );
        assert_eq!(counter.get(), 1_000_000);
    }

    #[rstest]
    fn do_while_m_runs_a_million_iterations() {
        let counter = Cell::new(0_u32);
        let last = do_while_m(
            || Identity(counter.get() < 1_000_000),
            || {
                counter.set(counter.get() + 1);
                Identity(counter.get())
            },
        );
        assert_eq!(last, Identity(1_000_000));
    }

    #[rstest]
    fn until_m_over_result_runs_a_million_iterations() {
        let counter = Cell::new(0_u32);
        let result: Result<(), String> = until_m(
            || Ok::<bool, String>(counter.get() == 1_000_000),
            || Ok::<(), String>(counter.set(counter.get() + 1)),
        );
        assert_eq!(result, Ok(()));
        assert_eq!(counter.get(), 1_000_000);
    }

    #[rstest]
    fn until_m_loops_while_predicate_is_false() {
        let counter = Cell::new(0);
        let result = until_m(
            || Some(counter.get() >= 3),
            || Some(counter.set(counter.get() + 1)),
        );
        assert_eq!(result, Some(()));
        assert_eq!(counter.get(), 3);
    }

    #[rstest]
    fn do_while_m_runs_body_once_when_predicate_is_false() {
        let runs = Cell::new(0);
        let result = do_while_m(
            || Identity(false),
            || {
                runs.set(runs.get() + 1);
                Identity("only run")
            },
        );
        assert_eq!(result, Identity("only run"));
        assert_eq!(runs.get(), 1);
    }

    #[rstest]
    fn do_while_m_returns_latest_result() {
        let counter = Cell::new(0);
        let result = do_while_m(
            || Some(counter.get() < 4),
            || {
                counter.set(counter.get() + 1);
                Some(counter.get())
            },
        );
        assert_eq!(result, Some(4));
    }

    #[rstest]
    fn do_until_m_loops_until_predicate_holds() {
        let counter = Cell::new(10);
        let result = do_until_m(
            || Some(counter.get() == 0),
            || {
                counter.set(counter.get() - 1);
                Some(counter.get())
            },
        );
        assert_eq!(result, Some(0));
    }

    #[rstest]
    fn do_until_m_failed_predicate_fails_the_loop() {
        let result: Option<i32> = do_until_m(|| None::<bool>, || Some(1));
        assert_eq!(result, None);
    }
}
