use std::ffi::c_char;
use std::ptr;

use hodiya_core::mapping::MappingTable;
use hodiya_core::translit::{self, Direction};

use super::{ffi_guard, into_c_string};

/// Status codes for [`hodiya_mapping_load_config`].
pub const HODIYA_OK: i32 = 0;
pub const HODIYA_ERR_ARGUMENT: i32 = -1;
pub const HODIYA_ERR_IO: i32 = -2;
pub const HODIYA_ERR_INVALID_DATA: i32 = -3;

/// `direction` is `"toRoman"` or `"toScript"`; anything else returns null.
#[no_mangle]
pub extern "C" fn hodiya_transliterate(
    text: *const c_char,
    direction: *const c_char,
) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: text_str = text,
        str: direction_str = direction,
    );
    let Ok(direction) = direction_str.parse::<Direction>() else {
        return ptr::null_mut();
    };
    into_c_string(direction.apply(MappingTable::global(), text_str))
}

#[no_mangle]
pub extern "C" fn hodiya_script_to_roman(text: *const c_char) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: text_str = text,
    );
    into_c_string(translit::script_to_roman(MappingTable::global(), text_str))
}

#[no_mangle]
pub extern "C" fn hodiya_roman_to_script(text: *const c_char) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: text_str = text,
    );
    into_c_string(translit::roman_to_script(MappingTable::global(), text_str))
}

/// Register a custom mapping TOML file. Must be called before the first
/// conversion.
#[no_mangle]
pub extern "C" fn hodiya_mapping_load_config(path: *const c_char) -> i32 {
    ffi_guard!(HODIYA_ERR_ARGUMENT;
        str: path_str = path,
    );
    let Ok(content) = std::fs::read_to_string(path_str) else {
        return HODIYA_ERR_IO;
    };
    match MappingTable::init_custom(content) {
        Ok(()) => HODIYA_OK,
        Err(_) => HODIYA_ERR_INVALID_DATA,
    }
}
