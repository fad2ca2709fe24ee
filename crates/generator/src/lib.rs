//! Base image resolution for generated application images.
//!
//! A generator decides which image the application image is built FROM:
//! an explicit `from` in the generator's override config, then the
//! `<namespace>.generator.<name>.from` project property, then a default
//! chosen by packaging mode (native executable or runnable archive, detected
//! from the build directory unless `nativeImage` is set) and deployment target.
//! The result is appended to the caller's image list as one new entry.

pub mod artifact;
pub mod catalog;
pub mod composer;
pub mod context;
pub mod generator;
pub mod lookup;
pub mod native;
pub mod resolver;

pub use artifact::ArtifactProbe;
pub use catalog::{DefaultImageCatalog, DefaultImageLookup};
pub use composer::BuildSpecComposer;
pub use context::{BuildContext, GeneratorConfig, ProcessorConfig};
pub use generator::{Generator, QuarkusGenerator};
pub use lookup::PropertiesImageLookup;
pub use native::NativeModeResolver;
pub use resolver::{BaseImageResolver, ImageSource, ResolvedBaseImage};
