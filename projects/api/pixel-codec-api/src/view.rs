//! Borrowed buffers paired with their [`ImageLayout`].
//!
//! Both views check once, on construction, that the slice covers every layer and level of the
//! layout. Level accessors can then hand out subslices without further checks.

use crate::error::ConvertError;
use crate::layout::ImageLayout;

fn check_len(layout: &ImageLayout, len: usize) -> Result<(), ConvertError> {
    let needed = layout.total_size();
    if len < needed {
        return Err(ConvertError::SizeMismatch {
            needed,
            actual: len,
        });
    }
    Ok(())
}

/// A read-only buffer of pixels described by an [`ImageLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBufferView<'a> {
    layout: ImageLayout,
    data: &'a [u8],
}

impl<'a> PixelBufferView<'a> {
    /// Wraps `data`, which must hold at least [`ImageLayout::total_size`] bytes.
    ///
    /// # Errors
    ///
    /// [`ConvertError::SizeMismatch`] if `data` is too short.
    pub fn new(layout: ImageLayout, data: &'a [u8]) -> Result<Self, ConvertError> {
        check_len(&layout, data.len())?;
        Ok(Self { layout, data })
    }

    /// Wraps `data` whose length is already known to cover `layout`.
    #[inline]
    pub(crate) fn new_unchecked(layout: ImageLayout, data: &'a [u8]) -> Self {
        debug_assert!(data.len() >= layout.total_size());
        Self { layout, data }
    }

    /// The layout of the buffer.
    #[inline]
    pub fn layout(&self) -> &ImageLayout {
        &self.layout
    }

    /// The whole buffer.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The bytes of `level` in `layer`.
    ///
    /// # Panics
    ///
    /// If `layer` or `level` are outside the layout.
    #[inline]
    pub fn level(&self, layer: u32, level: u32) -> &'a [u8] {
        assert!(layer < self.layout.layers && level < self.layout.levels);
        &self.data[self.layout.level_range(layer, level)]
    }
}

/// A writable buffer of pixels described by an [`ImageLayout`].
#[derive(Debug, PartialEq, Eq)]
pub struct PixelBufferViewMut<'a> {
    layout: ImageLayout,
    data: &'a mut [u8],
}

impl<'a> PixelBufferViewMut<'a> {
    /// Wraps `data`, which must hold at least [`ImageLayout::total_size`] bytes.
    ///
    /// # Errors
    ///
    /// [`ConvertError::SizeMismatch`] if `data` is too short.
    pub fn new(layout: ImageLayout, data: &'a mut [u8]) -> Result<Self, ConvertError> {
        check_len(&layout, data.len())?;
        Ok(Self { layout, data })
    }

    #[inline]
    pub(crate) fn new_unchecked(layout: ImageLayout, data: &'a mut [u8]) -> Self {
        debug_assert!(data.len() >= layout.total_size());
        Self { layout, data }
    }

    /// The layout of the buffer.
    #[inline]
    pub fn layout(&self) -> &ImageLayout {
        &self.layout
    }

    /// The whole buffer.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &*self.data
    }

    /// The whole buffer, writable.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut *self.data
    }

    /// The bytes of `level` in `layer`, writable.
    ///
    /// # Panics
    ///
    /// If `layer` or `level` are outside the layout.
    #[inline]
    pub fn level_mut(&mut self, layer: u32, level: u32) -> &mut [u8] {
        assert!(layer < self.layout.layers && level < self.layout.levels);
        &mut self.data[self.layout.level_range(layer, level)]
    }

    /// Reborrows as a read-only view.
    #[inline]
    pub fn as_view(&self) -> PixelBufferView<'_> {
        PixelBufferView {
            layout: self.layout,
            data: &*self.data,
        }
    }
}
