//! # bn254-g2
//!
//! Arithmetic over the G2 group of the BN254 (alt_bn128) curve, as consumed by
//! the pairing precompiles.
//!
//! Untrusted bytes only become a [`G2Point`] through [`G2Point::decode`], which
//! checks canonical field encodings, the twist equation and prime-order subgroup
//! membership. Every value of the type is therefore a valid group element, and
//! the group operations on it are total.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

pub mod constants;
pub mod error;
mod field;
pub mod g2;
pub mod group;
mod jacobian;
pub mod scalar;

pub use error::G2Error;
pub use g2::G2Point;
pub use group::GroupElement;
pub use scalar::read_scalar;

pub use ark_bn254::Fq2;
pub use num_bigint::BigUint;
