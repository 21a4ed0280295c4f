//! Descriptor model for the ctorgen constructor generator.
//!
//! This crate provides the passive data shapes describing declared types and
//! their members, as supplied by a symbol-information provider. The
//! descriptors are immutable inputs to a generation pass.
//!
//! # Architecture
//!
//! ```text
//! ctorgen.toml → ctorgen-manifest (parsing) → ctorgen-model (snapshot) → codegen
//! ```
//!
//! The model types are designed to be:
//! - Provider-agnostic (no parsing or host-toolchain concerns)
//! - Fully resolved (markers are booleans, base links are [`TypeId`]s)
//! - Self-contained (no external dependencies beyond serde)

mod attribute;
mod member;
mod snapshot;
mod types;

pub use attribute::{AttributeArgument, AttributeData, AttributeTarget, ConstantValue, MarkerKind};
pub use member::{MemberDescriptor, MemberKind, Mutability};
pub use snapshot::TypeSnapshot;
pub use types::{ContainingType, GenericParameter, TypeConstraint, TypeDescriptor, TypeId, TypeKind};
