/// Implements the [`Iterator`] methods of a wrapper around a slice or vec iterator stored in
/// `self.inner`, mapping each item through `$f`.
macro_rules! forward_iterator {
    () => {
        forward_iterator!(|x| x);
    };
    ($f: expr) => {
        fn next(&mut self) -> Option<Self::Item> {
            self.inner.next().map($f)
        }
        fn size_hint(&self) -> (usize, Option<usize>) {
            self.inner.size_hint()
        }
        fn count(self) -> usize {
            self.inner.len()
        }
        fn nth(&mut self, n: usize) -> Option<Self::Item> {
            self.inner.nth(n).map($f)
        }
        fn last(mut self) -> Option<Self::Item> {
            self.inner.next_back().map($f)
        }
    };
}
pub(crate) use forward_iterator;

/// Implements [`DoubleEndedIterator`] and [`ExactSizeIterator`] for a wrapper defined with
/// [`forward_iterator`].
macro_rules! forward_double_ended {
    ($name: ident <$($param: tt),*>) => {
        forward_double_ended!($name<$($param),*>, |x| x);
    };
    ($name: ident <$($param: tt),*>, $f: expr) => {
        impl<$($param),*> DoubleEndedIterator for $name<$($param),*> {
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.next_back().map($f)
            }
        }
        impl<$($param),*> ExactSizeIterator for $name<$($param),*> {
            fn len(&self) -> usize {
                self.inner.len()
            }
        }
        impl<$($param),*> std::iter::FusedIterator for $name<$($param),*> {}
    };
}
pub(crate) use forward_double_ended;
