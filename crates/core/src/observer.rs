/// Receives iteration records as a solver produces them.
///
/// Observers see every record in order, the same rows that end up in the
/// returned trace. They cannot steer or stop a run: the iteration budget is
/// the only bound a solver honours.
///
/// Closures implement `Observer`, and `()` is a no-op observer.
pub trait Observer<E> {
    /// Observes one record.
    fn observe(&mut self, event: &E);
}

impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event);
    }
}

impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed<O: Observer<f64>>(observer: &mut O, values: &[f64]) {
        for value in values {
            observer.observe(value);
        }
    }

    #[test]
    fn closure_sees_every_event() {
        let mut seen = Vec::new();
        let mut observer = |x: &f64| seen.push(*x);
        feed(&mut observer, &[1.0, 2.0, 3.0]);
        assert_eq!(seen, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn unit_is_a_no_op() {
        feed(&mut (), &[1.0, 2.0]);
    }
}
