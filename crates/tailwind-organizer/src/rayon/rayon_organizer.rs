//! # Parallel Organizer

use crate::organizer::{ClassOrganizer, OrganizerOptions};

/// Batch-Level Parallel Organizer Wrapper.
///
/// Enables ``rayon`` organizing of batches; single calls go straight to the
/// inner organizer.
#[derive(Debug, Clone)]
pub struct ParallelRayonOrganizer<O: ClassOrganizer> {
    /// Inner organizer.
    pub inner: O,
}

impl<O: ClassOrganizer> ParallelRayonOrganizer<O> {
    /// Create a new parallel organizer.
    ///
    /// ## Arguments
    /// * `inner` - The organizer to wrap.
    pub fn new(inner: O) -> Self {
        Self { inner }
    }
}

impl<O: ClassOrganizer> ClassOrganizer for ParallelRayonOrganizer<O> {
    fn options(&self) -> &OrganizerOptions {
        self.inner.options()
    }

    fn organize(
        &self,
        class_string: &str,
    ) -> String {
        self.inner.organize(class_string)
    }

    fn organize_batch(
        &self,
        batch: &[String],
    ) -> Vec<String> {
        use rayon::prelude::*;
        batch.par_iter().map(|s| self.inner.organize(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        organizer::DefaultClassOrganizer,
        types::{check_is_send, check_is_sync},
    };

    #[test]
    fn test_parallel_matches_serial() {
        let serial = DefaultClassOrganizer::default();
        let parallel = ParallelRayonOrganizer::new(serial.clone());
        check_is_send(&parallel);
        check_is_sync(&parallel);

        let batch: Vec<String> = (0..256)
            .map(|i| format!("mt-{i} foo-{i} flex z-{i} hover:bg-white dark:x{i}"))
            .collect();

        assert_eq!(parallel.organize_batch(&batch), serial.organize_batch(&batch));
        assert_eq!(parallel.organize(&batch[0]), serial.organize(&batch[0]));
        assert_eq!(parallel.options(), serial.options());
    }
}
