//! C-ABI Foreign Function Interface for sheetgrid.
//!
//! # Memory Management
//!
//! All strings returned by this library must be freed using `sheetgrid_free_string`.
//! All table handles must be freed using `sheetgrid_free_table`.
//!
//! # Error Handling
//!
//! Functions that can fail return a null pointer (or `-1` for counts) on error.
//! Use `sheetgrid_last_error` to retrieve the error message.
//!
//! # Example (C)
//!
//! ```c
//! #include <stdio.h>
//! #include "sheetgrid.h"
//!
//! int main() {
//!     SheetgridTable* table = sheetgrid_read_file("data.xlsx");
//!     if (!table) {
//!         fprintf(stderr, "Error: %s\n", sheetgrid_last_error());
//!         return 1;
//!     }
//!
//!     for (int r = 0; r < sheetgrid_row_count(table); r++) {
//!         for (int c = 0; c < sheetgrid_row_len(table, r); c++) {
//!             char* value = sheetgrid_cell(table, r, c);
//!             printf("%s\t", value);
//!             sheetgrid_free_string(value);
//!         }
//!         printf("\n");
//!     }
//!
//!     sheetgrid_free_table(table);
//!     return 0;
//! }
//! ```

use std::cell::RefCell;
use std::ffi::{c_char, c_int, CStr, CString};
use std::panic::catch_unwind;
use std::ptr;

use crate::model::Table;
use crate::render::JsonFormat;

// Thread-local storage for the last error message.
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

fn into_c_string(value: String) -> *mut c_char {
    match CString::new(value) {
        Ok(s) => s.into_raw(),
        Err(_) => {
            set_last_error("output contains null byte");
            ptr::null_mut()
        }
    }
}

/// Opaque handle to a table.
#[repr(C)]
pub struct SheetgridTable {
    inner: Table,
}

/// JSON format options.
pub const SHEETGRID_JSON_PRETTY: c_int = 0;
pub const SHEETGRID_JSON_COMPACT: c_int = 1;

/// Get the version of the library.
///
/// # Safety
///
/// Returns a static string that must not be freed.
#[no_mangle]
pub extern "C" fn sheetgrid_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}

/// Get the last error message.
///
/// # Safety
///
/// Returns a pointer to a thread-local error string. The pointer is valid until
/// the next call to any sheetgrid function on the same thread.
#[no_mangle]
pub extern "C" fn sheetgrid_last_error() -> *const c_char {
    LAST_ERROR.with(|e| {
        e.borrow()
            .as_ref()
            .map(|s| s.as_ptr())
            .unwrap_or(ptr::null())
    })
}

/// Read a spreadsheet file.
///
/// # Safety
///
/// - `path` must be a valid null-terminated UTF-8 string.
/// - Returns null on error. Use `sheetgrid_last_error` to get the error message.
/// - The returned handle must be freed with `sheetgrid_free_table`.
#[no_mangle]
pub unsafe extern "C" fn sheetgrid_read_file(path: *const c_char) -> *mut SheetgridTable {
    clear_last_error();

    if path.is_null() {
        set_last_error("path is null");
        return ptr::null_mut();
    }

    let result = catch_unwind(|| {
        let path_str = CStr::from_ptr(path).to_str().map_err(|e| e.to_string())?;

        crate::read_file(path_str)
            .map(|table| Box::into_raw(Box::new(SheetgridTable { inner: table })))
            .map_err(|e| e.to_string())
    });

    match result {
        Ok(Ok(table)) => table,
        Ok(Err(e)) => {
            set_last_error(&e);
            ptr::null_mut()
        }
        Err(_) => {
            set_last_error("panic occurred during reading");
            ptr::null_mut()
        }
    }
}

/// Free a table handle.
///
/// # Safety
///
/// - `table` must be a pointer returned by `sheetgrid_read_file`, or null.
/// - After calling this function, the handle is invalid and must not be used.
#[no_mangle]
pub unsafe extern "C" fn sheetgrid_free_table(table: *mut SheetgridTable) {
    if !table.is_null() {
        let _ = Box::from_raw(table);
    }
}

/// Number of rows in a table, or -1 if `table` is null.
///
/// # Safety
///
/// - `table` must be a valid table handle or null.
#[no_mangle]
pub unsafe extern "C" fn sheetgrid_row_count(table: *const SheetgridTable) -> c_int {
    if table.is_null() {
        set_last_error("table is null");
        return -1;
    }
    (*table).inner.row_count() as c_int
}

/// Number of cells in a row, or -1 if `table` is null or `row` is out of range.
///
/// # Safety
///
/// - `table` must be a valid table handle or null.
#[no_mangle]
pub unsafe extern "C" fn sheetgrid_row_len(table: *const SheetgridTable, row: c_int) -> c_int {
    if table.is_null() {
        set_last_error("table is null");
        return -1;
    }
    let Ok(row) = usize::try_from(row) else {
        set_last_error("row index is negative");
        return -1;
    };
    match (*table).inner.row(row) {
        Some(r) => r.len() as c_int,
        None => {
            set_last_error("row index out of range");
            -1
        }
    }
}

/// Get a cell value.
///
/// # Safety
///
/// - `table` must be a valid table handle.
/// - Returns null if the position is out of range.
/// - The returned string must be freed with `sheetgrid_free_string`.
#[no_mangle]
pub unsafe extern "C" fn sheetgrid_cell(
    table: *const SheetgridTable,
    row: c_int,
    col: c_int,
) -> *mut c_char {
    clear_last_error();

    if table.is_null() {
        set_last_error("table is null");
        return ptr::null_mut();
    }
    let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
        set_last_error("cell index is negative");
        return ptr::null_mut();
    };

    match (*table).inner.cell(row, col) {
        Some(value) => into_c_string(value.to_string()),
        None => {
            set_last_error("cell index out of range");
            ptr::null_mut()
        }
    }
}

/// Convert a table to JSON.
///
/// # Safety
///
/// - `table` must be a valid table handle.
/// - `format` is `SHEETGRID_JSON_PRETTY` or `SHEETGRID_JSON_COMPACT`.
/// - The returned string must be freed with `sheetgrid_free_string`.
#[no_mangle]
pub unsafe extern "C" fn sheetgrid_to_json(
    table: *const SheetgridTable,
    format: c_int,
) -> *mut c_char {
    clear_last_error();

    if table.is_null() {
        set_last_error("table is null");
        return ptr::null_mut();
    }

    let json_format = if format == SHEETGRID_JSON_COMPACT {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let result = catch_unwind(|| crate::render::to_json(&(*table).inner, json_format));

    match result {
        Ok(Ok(json)) => into_c_string(json),
        Ok(Err(e)) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
        Err(_) => {
            set_last_error("panic occurred during rendering");
            ptr::null_mut()
        }
    }
}

/// Free a string allocated by this library.
///
/// # Safety
///
/// - `s` must be a pointer returned by a sheetgrid function, or null.
/// - After calling this function, the pointer is invalid and must not be used.
#[no_mangle]
pub unsafe extern "C" fn sheetgrid_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = CString::from_raw(s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_version() {
        let version = sheetgrid_version();
        assert!(!version.is_null());
        let version_str = unsafe { CStr::from_ptr(version) }.to_str().unwrap();
        assert!(!version_str.is_empty());
    }

    #[test]
    fn test_read_null_path() {
        let table = unsafe { sheetgrid_read_file(ptr::null()) };
        assert!(table.is_null());
        assert!(!sheetgrid_last_error().is_null());
    }

    #[test]
    fn test_read_unsupported_path() {
        let path = CString::new("report.docx").unwrap();
        let table = unsafe { sheetgrid_read_file(path.as_ptr()) };
        assert!(table.is_null());

        let error = unsafe { CStr::from_ptr(sheetgrid_last_error()) };
        assert!(error.to_str().unwrap().starts_with("Unsupported format"));
    }

    #[test]
    fn test_read_and_access() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"a,b\nc\n").unwrap();
        let path = CString::new(file.path().to_str().unwrap()).unwrap();

        let table = unsafe { sheetgrid_read_file(path.as_ptr()) };
        assert!(!table.is_null());

        unsafe {
            assert_eq!(sheetgrid_row_count(table), 2);
            assert_eq!(sheetgrid_row_len(table, 0), 2);
            assert_eq!(sheetgrid_row_len(table, 1), 1);
            assert_eq!(sheetgrid_row_len(table, 2), -1);

            let cell = sheetgrid_cell(table, 0, 1);
            assert_eq!(CStr::from_ptr(cell).to_str().unwrap(), "b");
            sheetgrid_free_string(cell);

            assert!(sheetgrid_cell(table, 1, 1).is_null());

            let json = sheetgrid_to_json(table, SHEETGRID_JSON_COMPACT);
            assert_eq!(
                CStr::from_ptr(json).to_str().unwrap(),
                r#"{"rows":[["a","b"],["c"]]}"#
            );
            sheetgrid_free_string(json);

            sheetgrid_free_table(table);
        }
    }

    #[test]
    fn test_null_table_operations() {
        unsafe {
            assert_eq!(sheetgrid_row_count(ptr::null()), -1);
            assert_eq!(sheetgrid_row_len(ptr::null(), 0), -1);
            assert!(sheetgrid_cell(ptr::null(), 0, 0).is_null());
            assert!(sheetgrid_to_json(ptr::null(), 0).is_null());
        }
    }

    #[test]
    fn test_free_null() {
        // Should not crash
        unsafe {
            sheetgrid_free_table(ptr::null_mut());
            sheetgrid_free_string(ptr::null_mut());
        }
    }
}
