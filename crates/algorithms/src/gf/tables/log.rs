//! Logarithm and antilogarithm tables for GF(2^8) and GF(2^16)

use gfcore_api::FieldWidth;

use super::super::poly::shift_multiply;
use crate::error::{Error, Result};

/// Storage word for a table entry
pub trait TableWord: Copy + Default + Send + Sync + 'static {
    /// Narrow a value known to fit in the word
    fn from_u32(v: u32) -> Self;
    /// Widen to `u32`
    fn to_u32(self) -> u32;
}

macro_rules! impl_table_word {
    ($($t:ty),*) => {
        $(
            impl TableWord for $t {
                #[inline(always)]
                fn from_u32(v: u32) -> Self {
                    v as $t
                }

                #[inline(always)]
                fn to_u32(self) -> u32 {
                    self as u32
                }
            }
        )*
    };
}

impl_table_word!(u8, u16);

/// Discrete log and antilog tables for a field whose elements fit in `T`.
///
/// `log[0]` holds the sentinel `2^w - 1`, which is never a valid
/// logarithm. `antilog` is stored twice over (length `2 * (2^w - 1)`) so a
/// sum of two logarithms indexes it without a modulo.
pub struct LogTables<T: TableWord> {
    log: Box<[T]>,
    antilog: Box<[T]>,
    order: u32,
}

impl<T: TableWord> LogTables<T> {
    /// Walk the powers of the field generator and record each one.
    ///
    /// Fails if the walk returns to one before visiting all `2^w - 1`
    /// nonzero elements, i.e. the generator does not generate the group
    /// modulo `polynomial`.
    pub fn build(width: FieldWidth, polynomial: u64) -> Result<Self> {
        let bits = width.bits();
        let order = width.order() as usize;
        let generator = width.params().generator as u64;

        let mut log = vec![T::from_u32(order as u32); order + 1].into_boxed_slice();
        let mut antilog = vec![T::default(); 2 * order].into_boxed_slice();

        let mut power = 1u64;
        for i in 0..order {
            if i > 0 && power == 1 {
                return Err(Error::config(
                    "log table construction",
                    format!(
                        "powers of {:#x} cycle after {} steps modulo {:#x}; {} requires {}",
                        generator, i, polynomial, width, order
                    ),
                ));
            }
            antilog[i] = T::from_u32(power as u32);
            log[power as usize] = T::from_u32(i as u32);
            power = shift_multiply(power, generator, bits, polynomial);
        }
        if power != 1 {
            return Err(Error::config(
                "log table construction",
                format!("{:#x}^{} != 1 modulo {:#x}", generator, order, polynomial),
            ));
        }

        let (head, tail) = antilog.split_at_mut(order);
        tail.copy_from_slice(head);

        Ok(Self {
            log,
            antilog,
            order: order as u32,
        })
    }

    /// Order of the multiplicative group
    #[inline(always)]
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Discrete logarithm of a nonzero element
    #[inline(always)]
    pub fn log(&self, a: u32) -> u32 {
        self.log[a as usize].to_u32()
    }

    /// `x^i` for any `i < 2 * (2^w - 1)`
    #[inline(always)]
    pub fn antilog(&self, i: u32) -> u32 {
        self.antilog[i as usize].to_u32()
    }

    /// Product of two elements
    #[inline(always)]
    pub fn multiply(&self, a: u32, b: u32) -> u32 {
        if a == 0 || b == 0 {
            return 0;
        }
        self.antilog(self.log(a) + self.log(b))
    }

    /// Quotient `a / b`; `b` must be nonzero
    #[inline(always)]
    pub fn divide(&self, a: u32, b: u32) -> u32 {
        if a == 0 {
            return 0;
        }
        // log a - log b, shifted into [1, 2 * order)
        self.antilog(self.log(a) + self.order - self.log(b))
    }

    /// Multiplicative inverse; `a` must be nonzero
    #[inline(always)]
    pub fn inverse(&self, a: u32) -> u32 {
        self.antilog(self.order - self.log(a))
    }

    /// `a^e`
    pub fn pow(&self, a: u32, e: u64) -> u32 {
        if e == 0 {
            return 1;
        }
        if a == 0 {
            return 0;
        }
        let exp = (self.log(a) as u64 * (e % self.order as u64)) % self.order as u64;
        self.antilog(exp as u32)
    }

    /// Raw log table, indexed by element
    pub fn log_table(&self) -> &[T] {
        &self.log
    }

    /// Raw antilog table, indexed by exponent
    pub fn antilog_table(&self) -> &[T] {
        &self.antilog
    }
}
