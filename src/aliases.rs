// src/aliases.rs
//! Zeroizing secret types backed by secure-gate

use secure_gate::dynamic_alias;

// Raw key bytes before they are base64-encoded into a wire `Key`
dynamic_alias!(KeyMaterial, Vec<u8>);
