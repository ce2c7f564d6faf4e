use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{LitByte, LitStr, parse_macro_input};

/// Expands a string of hexadecimal byte pairs into a `[u8; N]` array at compile time.
///
/// This keeps binary format constants readable as the hex dumps they are
/// copied from, while still producing a plain array expression usable in
/// `const` items.
///
/// # Format
///
/// - Each byte is written as exactly two hex digits (`0-9`, `a-f`, `A-F`)
/// - Whitespace and `_` between digits are ignored
/// - An empty string produces an empty array
///
/// # Examples
///
/// ```ignore
/// use curvesmith_macros::bytes;
///
/// const MAGIC: [u8; 4] = bytes!("43 72 76 44");
/// assert_eq!(&MAGIC, b"CrvD");
///
/// const SPACER: [u8; 3] = bytes!("000000");
/// ```
#[proc_macro]
pub fn bytes(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    let hex = input.value();

    match parse_hex(&hex) {
        Ok(bytes) => {
            let literals = bytes.iter().map(|b| LitByte::new(*b, Span::call_site()));
            let expanded = quote! {
                [#(#literals),*]
            };
            TokenStream::from(expanded)
        }
        Err(e) => {
            let error_msg = format!("Invalid byte string '{}': {}", hex, e);
            let expanded = quote! {
                compile_error!(#error_msg)
            };
            TokenStream::from(expanded)
        }
    }
}

fn hex_value(c: char) -> Result<u8, String> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| format!("invalid hex digit '{}'", c))
}

fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<char> = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .collect();

    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits ({})", digits.len()));
    }

    digits
        .chunks(2)
        .map(|pair| Ok((hex_value(pair[0])? << 4) | hex_value(pair[1])?))
        .collect()
}
