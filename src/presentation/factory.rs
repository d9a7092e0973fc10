//! Use Case Factory
//!
//! Creates use cases wired to the local disk.

use crate::application::{CheckUseCase, PlanUseCase};
use crate::infrastructure::LocalFs;

/// Plan use case over the local file system
pub fn create_plan_use_case() -> PlanUseCase<LocalFs> {
    PlanUseCase::new(LocalFs::new())
}

/// Check use case over the local file system
pub fn create_check_use_case() -> CheckUseCase<LocalFs> {
    CheckUseCase::new(LocalFs::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{CheckOptions, PlanRequest};
    use crate::config::LoadedConfig;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn local_use_cases_see_real_files() {
        let dir = tempdir().unwrap();
        for rel in ["src/popup/index.html", "src/background/index.ts", "src/content/index.ts"] {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "").unwrap();
        }
        let loaded = LoadedConfig::defaults(dir.path());

        let plan = create_plan_use_case()
            .execute(&loaded, &PlanRequest::default())
            .unwrap();
        assert_eq!(plan.entries().len(), 3);
        assert_eq!(plan.out_dir(), dir.path().join("dist"));

        let report = create_check_use_case().execute(&loaded, CheckOptions { strict: true });
        assert!(report.is_success());
    }
}
