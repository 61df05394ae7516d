//! C FFI bindings for embedded callers.

use crate::mac::Mac611;
use core::slice;

/// Opaque context handle for FFI.
pub struct Mac611Ctx {
    inner: Mac611,
}

/// Create a context from a 16-byte key.
/// Returns a pointer to the context (caller must release it with
/// mac611_free), or null if `key` is null.
#[unsafe(no_mangle)]
pub extern "C" fn mac611_new(key: *const u8) -> *mut Mac611Ctx {
    if key.is_null() {
        return core::ptr::null_mut();
    }
    let key = unsafe { &*(key as *const [u8; 16]) };
    let ctx = Box::new(Mac611Ctx {
        inner: Mac611::new(key),
    });
    Box::into_raw(ctx)
}

/// Release a context.
#[unsafe(no_mangle)]
pub extern "C" fn mac611_free(ctx: *mut Mac611Ctx) {
    if !ctx.is_null() {
        unsafe {
            let _ = Box::from_raw(ctx);
        }
    }
}

/// Compute the tag of a message.
/// - ctx: pointer from mac611_new()
/// - msg: pointer to message bytes (may be null when len is 0)
/// - len: message length in bytes
/// - nonce: pointer to the 8-byte nonce
/// - tag_out: pointer to an 8-byte buffer receiving the tag
#[unsafe(no_mangle)]
pub extern "C" fn mac611_tag(
    ctx: *mut Mac611Ctx,
    msg: *const u8,
    len: usize,
    nonce: *const u8,
    tag_out: *mut u8,
) {
    if ctx.is_null() || nonce.is_null() || tag_out.is_null() || (msg.is_null() && len != 0) {
        return;
    }

    unsafe {
        let ctx = &mut *ctx;
        let msg = if len == 0 {
            &[]
        } else {
            slice::from_raw_parts(msg, len)
        };
        let nonce = &*(nonce as *const [u8; 8]);
        let tag = ctx.inner.tag(msg, nonce);
        slice::from_raw_parts_mut(tag_out, 8).copy_from_slice(&tag);
    }
}
