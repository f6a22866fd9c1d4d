use std::marker::PhantomData;

/// A readable stream of binary data.
#[derive(Clone, Debug)]
pub struct Reader<'a> {
    /// The underlying data of the reader.
    data: &'a [u8],
    /// The current offset in bytes. Is not guaranteed to be in range.
    offset: usize,
}

impl<'a> Reader<'a> {
    /// Create a new readable stream of binary data.
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Create a new readable stream of binary data at a specific position.
    #[inline]
    pub fn new_at(data: &'a [u8], offset: usize) -> Self {
        Self { data, offset }
    }

    /// The remaining data from the current offset.
    #[inline]
    pub fn tail(&self) -> Option<&'a [u8]> {
        self.data.get(self.offset..)
    }

    /// Returns the current offset.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Try to read `T` from the data.
    #[inline]
    pub fn read<T: Readable<'a>>(&mut self) -> Option<T> {
        T::read(self)
    }

    /// Read a certain number of bytes.
    #[inline]
    pub fn read_bytes(&mut self, len: usize) -> Option<&'a [u8]> {
        let v = self.data.get(self.offset..self.offset.checked_add(len)?)?;
        self.offset += len;
        Some(v)
    }

    /// Reads the next `count` items as a lazily decoded array.
    #[inline]
    pub fn read_array16<T: Readable<'a>>(
        &mut self,
        count: u16,
    ) -> Option<LazyArray16<'a, T>> {
        let len = usize::from(count) * T::SIZE;
        self.read_bytes(len).map(LazyArray16::new)
    }

    /// Try to read a vector of `T` from the data.
    pub fn read_vector<T: Readable<'a>>(&mut self, count: usize) -> Option<Vec<T>> {
        let mut res = Vec::with_capacity(count.min(4096));
        for _ in 0..count {
            res.push(self.read::<T>()?);
        }
        Some(res)
    }

    /// Advances by `n` bytes, failing if that leaves the data.
    #[inline]
    pub fn skip_bytes(&mut self, n: usize) -> Option<()> {
        self.read_bytes(n).map(|_| ())
    }

    /// Advances by `Readable::SIZE`.
    #[inline]
    pub fn skip<T: Readable<'a>>(&mut self) -> Option<()> {
        self.skip_bytes(T::SIZE)
    }
}

/// A writable stream of binary data.
pub struct Writer(Vec<u8>);

impl Writer {
    /// Create a new writable stream of binary data.
    #[inline]
    pub fn new() -> Self {
        Self(Vec::with_capacity(1024))
    }

    /// Create a new writable stream of binary data with a capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Write `T` into the data.
    #[inline]
    pub fn write<T: Writeable>(&mut self, data: T) {
        data.write(self);
    }

    /// Give bytes into the writer.
    #[inline]
    pub fn extend(&mut self, bytes: &[u8]) {
        self.0.extend_from_slice(bytes);
    }

    /// Write a slice of `T`s into the data.
    #[inline]
    pub fn write_vector<T: Writeable>(&mut self, data: &[T]) {
        for item in data {
            item.write(self);
        }
    }

    /// Align the contents to a byte boundary.
    #[inline]
    pub fn align(&mut self, to: usize) {
        while self.0.len() % to != 0 {
            self.0.push(0);
        }
    }

    /// The number of written bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return the written bytes.
    #[inline]
    pub fn finish(self) -> Vec<u8> {
        self.0
    }
}

/// Trait for an object that can be read from a byte stream with a fixed size.
pub trait Readable<'a>: Sized {
    const SIZE: usize;

    fn read(r: &mut Reader<'a>) -> Option<Self>;

    /// Read the object at a specific offset in `data`.
    fn read_at(data: &'a [u8], offset: usize) -> Option<Self> {
        Self::read(&mut Reader::new_at(data, offset))
    }
}

/// Trait for an object that can be written into a byte stream.
pub trait Writeable: Sized {
    fn write(&self, w: &mut Writer);
}

impl<const N: usize> Readable<'_> for [u8; N] {
    const SIZE: usize = N;

    fn read(r: &mut Reader) -> Option<Self> {
        r.read_bytes(N)?.try_into().ok()
    }
}

impl<const N: usize> Writeable for [u8; N] {
    fn write(&self, w: &mut Writer) {
        w.extend(self)
    }
}

impl Writeable for &[u8] {
    fn write(&self, w: &mut Writer) {
        w.extend(self)
    }
}

macro_rules! impl_int {
    ($($ty:ty),*) => {$(
        impl Readable<'_> for $ty {
            const SIZE: usize = std::mem::size_of::<$ty>();

            #[inline]
            fn read(r: &mut Reader) -> Option<Self> {
                r.read::<[u8; std::mem::size_of::<$ty>()]>().map(Self::from_be_bytes)
            }
        }

        impl Writeable for $ty {
            #[inline]
            fn write(&self, w: &mut Writer) {
                w.extend(&self.to_be_bytes());
            }
        }
    )*};
}

impl_int!(u8, i8, u16, i16, u32, i32);

/// A slice-like container that converts internal binary data only on access.
///
/// Array values are stored in a continuous data chunk.
#[derive(Clone, Copy)]
pub struct LazyArray16<'a, T> {
    data: &'a [u8],
    data_type: PhantomData<T>,
}

impl<T> Default for LazyArray16<'_, T> {
    #[inline]
    fn default() -> Self {
        LazyArray16 { data: &[], data_type: PhantomData }
    }
}

impl<'a, T: Readable<'a>> LazyArray16<'a, T> {
    /// Creates a new `LazyArray`.
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        LazyArray16 { data, data_type: PhantomData }
    }

    /// Returns a value at `index`.
    #[inline]
    pub fn get(&self, index: u16) -> Option<T> {
        if index < self.len() {
            let start = usize::from(index) * T::SIZE;
            let end = start + T::SIZE;
            self.data.get(start..end).map(Reader::new).and_then(|mut r| T::read(&mut r))
        } else {
            None
        }
    }

    /// Returns array's length.
    #[inline]
    pub fn len(&self) -> u16 {
        (self.data.len() / T::SIZE) as u16
    }
}

impl<'a, T: Readable<'a> + core::fmt::Debug + Copy> core::fmt::Debug
    for LazyArray16<'a, T>
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_list().entries((0..self.len()).filter_map(|i| self.get(i))).finish()
    }
}
