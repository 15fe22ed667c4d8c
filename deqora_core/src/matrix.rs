use bitvec::vec::BitVec;

/// Module (aka, a cell) of a QR code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Module {
    Light,
    Dark,
}

impl Module {
    /// Get the inverted module.
    /// # Example
    /// ```
    /// use deqora_core::Module;
    /// assert_eq!(Module::Dark.inverted(), Module::Light);
    /// assert_eq!(Module::Light.inverted(), Module::Dark);
    /// ```
    pub fn inverted(&self) -> Self {
        match self {
            Module::Dark => Module::Light,
            Module::Light => Module::Dark,
        }
    }

    /// Whether the module is dark.
    pub fn is_dark(&self) -> bool {
        matches!(self, Module::Dark)
    }
}

impl From<bool> for Module {
    fn from(value: bool) -> Self {
        match value {
            true => Module::Dark,
            false => Module::Light,
        }
    }
}

impl From<Module> for bool {
    fn from(value: Module) -> Self {
        match value {
            Module::Dark => true,
            Module::Light => false,
        }
    }
}

/// A square grid of modules as produced by a QR encoder.
///
/// The grid is row-major and its size is fixed at construction; downstream
/// renderers treat it as immutable and never re-validate it.
pub struct ModuleMatrix {
    data: BitVec,
    size: usize,
}

impl ModuleMatrix {
    /// Return a matrix of size `size` filled with `module`.
    #[inline]
    pub fn filled(size: usize, module: Module) -> Self {
        Self {
            data: BitVec::repeat(module.into(), size * size),
            size,
        }
    }

    /// Build a matrix from `size * size` row-major bits, where `true` is a
    /// dark module. Returns `None` if `bits` yields any other amount.
    /// # Example
    /// ```
    /// use deqora_core::{Module, ModuleMatrix};
    /// let matrix = ModuleMatrix::from_bits(2, [true, false, false, true]).unwrap();
    /// assert_eq!(matrix.get(0, 0), Some(Module::Dark));
    /// assert_eq!(matrix.get(0, 1), Some(Module::Light));
    /// assert!(ModuleMatrix::from_bits(2, [true; 3]).is_none());
    /// ```
    pub fn from_bits<I: IntoIterator<Item = bool>>(size: usize, bits: I) -> Option<Self> {
        let mut data = BitVec::with_capacity(size * size);
        for bit in bits {
            if data.len() == size * size {
                return None;
            }
            data.push(bit);
        }
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Get the side length of the matrix, in modules.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the 1D index of the data array corresponding to position `(i, j)`, checking for validity.
    #[inline]
    fn linearized_index(&self, i: usize, j: usize) -> Option<usize> {
        if i < self.size && j < self.size {
            Some(self.size * i + j)
        } else {
            None
        }
    }

    /// Get the module at position `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<Module> {
        self.data
            .get(self.linearized_index(i, j)?)
            .map(|bit| Module::from(*bit))
    }

    /// Set the module at position `(i, j)`.
    /// # Panics
    /// Panics if position `(i, j)` is out of bounds.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: Module) {
        let index = self.linearized_index(i, j).unwrap_or_else(|| {
            panic!(
                "index out of bounds: the size is {} but the index is ({}, {})",
                self.size, i, j
            )
        });
        self.data.set(index, value.into())
    }

    /// Fill a rectangle with its upper-left corner at (`i`, `j`) of size `width` and `height` with
    /// `value`.
    /// # Panics
    /// Panics if any access is out of bounds.
    #[inline]
    pub fn fill(&mut self, value: Module, i: usize, j: usize, width: usize, height: usize) {
        let (jmin, jmax) = (j, j + width);
        for line in i..(i + height) {
            let range = self.index_unwrapped(line, jmin)..=self.index_unwrapped(line, jmax - 1);
            self.data[range].fill(value.into())
        }
    }

    #[inline]
    fn index_unwrapped(&self, i: usize, j: usize) -> usize {
        self.linearized_index(i, j).unwrap_or_else(|| {
            panic!(
                "index out of bounds: the size is {} but the index is ({}, {})",
                self.size, i, j
            )
        })
    }
}

impl AsRef<ModuleMatrix> for ModuleMatrix {
    fn as_ref(&self) -> &ModuleMatrix {
        self
    }
}
