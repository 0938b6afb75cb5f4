use super::HeaderField;

/// Iterator over [`Headers`] name and value pairs, in insertion order.
///
/// [`Headers`]: super::Headers
#[derive(Debug)]
pub struct Iter<'a> {
    iter: std::slice::Iter<'a, HeaderField>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(fields: &'a [HeaderField]) -> Self {
        Self {
            iter: fields.iter(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|field| (field.name(), field.value()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
