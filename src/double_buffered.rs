/// A pair of buffers where readers only ever see `front`.
///
/// Writers fill `back` and call [`DoubleBuffered::swap`] once the contents are complete.
pub struct DoubleBuffered<A> {
    front: A,
    back: A,
}

impl<A: Clone> DoubleBuffered<A> {
    pub fn new(initial: A) -> Self {
        Self {
            back: initial.clone(),
            front: initial,
        }
    }
}

impl<A> DoubleBuffered<A> {
    pub fn front(&self) -> &A {
        &self.front
    }

    pub fn back_mut(&mut self) -> &mut A {
        &mut self.back
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_are_hidden_until_swap() {
        let mut buffers = DoubleBuffered::new(vec![0u8; 3]);
        buffers.back_mut().copy_from_slice(&[1, 2, 3]);
        assert_eq!(buffers.front(), &vec![0, 0, 0]);

        buffers.swap();
        assert_eq!(buffers.front(), &vec![1, 2, 3]);
    }
}
