//! Adapter boilerplate shared by the built-in backend kinds

/// Declare a borrowing adapter that maps the control contract onto the
/// native method names of one backend trait.
///
/// The generated adapter holds `&'a B` and never outlives its backend.
/// Errors are returned exactly as the backend produced them.
macro_rules! source_adapter {
    (
        $(#[$meta:meta])*
        pub struct $adapter:ident for $backend:ident ($kind:expr) {
            start => $start:ident,
            stop => $stop:ident,
            pause => $pause:ident $(,)?
        }
    ) => {
        $(#[$meta])*
        pub struct $adapter<'a, B: $backend + ?Sized> {
            backend: &'a B,
        }

        impl<'a, B: $backend + ?Sized> $adapter<'a, B> {
            /// Wrap a borrowed backend
            pub fn new(backend: &'a B) -> Self {
                Self { backend }
            }

            /// The wrapped backend
            pub fn backend(&self) -> &'a B {
                self.backend
            }

            /// Backend kind this adapter translates for
            pub fn kind(&self) -> $crate::SourceKind {
                $kind
            }
        }

        impl<B: $backend + ?Sized> ::tuneline_core::PlaybackControl for $adapter<'_, B> {
            fn start(&mut self) -> ::tuneline_core::Result<()> {
                ::tracing::debug!(backend = $kind.label(), "start -> {}", stringify!($start));
                self.backend.$start()
            }

            fn stop(&mut self) -> ::tuneline_core::Result<()> {
                ::tracing::debug!(backend = $kind.label(), "stop -> {}", stringify!($stop));
                self.backend.$stop()
            }

            fn pause(&mut self) -> ::tuneline_core::Result<()> {
                ::tracing::debug!(backend = $kind.label(), "pause -> {}", stringify!($pause));
                self.backend.$pause()
            }
        }
    };
}
