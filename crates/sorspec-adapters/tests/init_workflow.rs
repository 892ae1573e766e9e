//! End-to-end `init` runs through the real adapters.

use std::fs;
use std::path::{Path, PathBuf};

use sorspec_adapters::{LocalFilesystem, MemoryFilesystem, ResourceDir, builtin_requirements};
use sorspec_core::{
    application::{ApplicationError, InitService, ports::Filesystem},
    domain::{DomainError, InitOptions, Layer, LayerCatalog},
    error::SorspecError,
};
use tempfile::TempDir;

fn memory_service(fs: &MemoryFilesystem, resources: &Path) -> InitService {
    InitService::new(
        LayerCatalog::builtin(),
        builtin_requirements(&ResourceDir::new(resources)),
        Box::new(fs.clone()),
    )
}

#[test]
fn file_mode_writes_single_document() {
    let resources = TempDir::new().unwrap();
    let fs = MemoryFilesystem::new();
    let service = memory_service(&fs, resources.path());

    service
        .init(
            InitOptions::new("base")
                .layer(Layer::Server, "go")
                .requirement("authorization"),
        )
        .unwrap();

    assert_eq!(
        fs.read_file(Path::new("base/sorspec.yaml")).as_deref(),
        Some("app:\n  name: base\n  server:\n    core: go\n\nauthorization:\n  method: JWT\n")
    );
    assert_eq!(
        fs.list_files(),
        vec![
            PathBuf::from("base/.gitignore"),
            PathBuf::from("base/README.md"),
            PathBuf::from("base/sorspec.yaml"),
        ]
    );
}

#[test]
fn dir_mode_reserves_requirement_directory() {
    let resources = TempDir::new().unwrap();
    let fs = MemoryFilesystem::new();
    let service = memory_service(&fs, resources.path());

    service
        .init(InitOptions::new("myapp").mode("dir").requirement("authorization"))
        .unwrap();

    assert!(fs.exists(Path::new("myapp/sorspec/requirement")));
    assert_eq!(
        fs.read_file(Path::new("myapp/sorspec/app.yaml")).as_deref(),
        Some("app:\n  name: myapp\n\nauthorization:\n  method: JWT\n")
    );
}

#[test]
fn unreadable_resource_aborts_before_writing() {
    let resources = TempDir::new().unwrap();
    let fs = MemoryFilesystem::new();
    let service = memory_service(&fs, resources.path());

    let err = service
        .init(InitOptions::new("myapp").requirement("authentication"))
        .unwrap_err();

    match err {
        SorspecError::Application(e @ ApplicationError::ConfigUnavailable { .. }) => {
            assert_eq!(e.requirement(), Some("authentication"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(fs.list_files().is_empty());
    assert!(fs.list_directories().is_empty());
}

#[test]
fn failed_write_still_creates_placeholders() {
    let resources = TempDir::new().unwrap();
    let fs = MemoryFilesystem::new().fail_writes_to("myapp/sorspec.yaml");
    let service = memory_service(&fs, resources.path());

    let err = service.init(InitOptions::new("myapp")).unwrap_err();
    assert!(matches!(
        err,
        SorspecError::Application(ApplicationError::FilesystemError { .. })
    ));
    assert!(fs.exists(Path::new("myapp/.gitignore")));
    assert!(fs.exists(Path::new("myapp/README.md")));
    assert!(!fs.exists(Path::new("myapp/sorspec.yaml")));
}

#[test]
fn local_filesystem_round_trip_with_resource_file() {
    let resources = TempDir::new().unwrap();
    let auth = resources
        .path()
        .join("requirement/authentication/config/default.yaml");
    fs::create_dir_all(auth.parent().unwrap()).unwrap();
    fs::write(&auth, "provider: local\n\nsession:\n  ttl: 3600\n").unwrap();

    let out = TempDir::new().unwrap();
    let base = out.path().join("shop");
    let service = InitService::new(
        LayerCatalog::builtin(),
        builtin_requirements(&ResourceDir::new(resources.path())),
        Box::new(LocalFilesystem::new()),
    );

    let report = service
        .init(
            InitOptions::new(&base)
                .layer(Layer::Database, "postgres")
                .layer(Layer::Ios, "swift")
                .requirement("authentication"),
        )
        .unwrap();

    assert_eq!(report.config_file, base.join("sorspec.yaml"));
    assert_eq!(
        fs::read_to_string(base.join("sorspec.yaml")).unwrap(),
        "app:\n  name: shop\n  database:\n    core: postgres\n  ios:\n    core: swift\n\n\
         authentication:\n  provider: local\n\n  session:\n    ttl: 3600\n"
    );
    assert_eq!(fs::read_to_string(base.join("README.md")).unwrap(), "");
}

#[test]
fn existing_readme_is_preserved() {
    let out = TempDir::new().unwrap();
    let base = out.path().join("kept");
    fs::create_dir_all(&base).unwrap();
    fs::write(base.join("README.md"), "# kept\n").unwrap();

    let resources = TempDir::new().unwrap();
    let service = InitService::new(
        LayerCatalog::builtin(),
        builtin_requirements(&ResourceDir::new(resources.path())),
        Box::new(LocalFilesystem::new()),
    );
    let report = service.init(InitOptions::new(&base)).unwrap();

    assert_eq!(report.placeholders_created, vec![base.join(".gitignore")]);
    assert_eq!(fs::read_to_string(base.join("README.md")).unwrap(), "# kept\n");
}

#[test]
fn unknown_core_is_reported() {
    let resources = TempDir::new().unwrap();
    let fs = MemoryFilesystem::new();
    let err = memory_service(&fs, resources.path())
        .init(InitOptions::new("x").layer(Layer::Browser, "   "))
        .unwrap_err();
    assert!(matches!(
        err,
        SorspecError::Domain(DomainError::UnknownCore { .. })
    ));
}

#[test]
fn empty_core_is_reported() {
    let resources = TempDir::new().unwrap();
    let fs = MemoryFilesystem::new();
    let err = memory_service(&fs, resources.path())
        .init(InitOptions::new("x").layer(Layer::Server, ""))
        .unwrap_err();
    assert!(matches!(
        err,
        SorspecError::Domain(DomainError::UnknownCore { .. })
    ));
    assert!(!fs.exists(Path::new("x")));
}

#[test]
fn second_init_replaces_configuration() {
    let resources = TempDir::new().unwrap();
    let fs = MemoryFilesystem::new();
    let service = memory_service(&fs, resources.path());

    let first = service.init(InitOptions::new("myapp")).unwrap();
    assert!(!first.replaced);

    let second = service
        .init(InitOptions::new("myapp").layer(Layer::Server, "go"))
        .unwrap();
    assert!(second.replaced);
    assert!(second.placeholders_created.is_empty());
    assert_eq!(
        fs.read_file(Path::new("myapp/sorspec.yaml")).as_deref(),
        Some("app:\n  name: myapp\n  server:\n    core: go\n")
    );
}
