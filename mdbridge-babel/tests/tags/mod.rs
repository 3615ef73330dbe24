//! Tag recognizer tests
//!
//! Typing into an edit surface and converting the result back to host text.

mod typing;
