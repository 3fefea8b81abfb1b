//! Named field access for quaternions, sharing the vector view structs.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::{vector::view::XYZW, Quat};

impl<T> Deref for Quat<T> {
    type Target = XYZW<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for Quat<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}
