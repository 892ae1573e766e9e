//! Init Service - main application orchestrator.
//!
//! This service coordinates the whole `init` workflow:
//! 1. Validate mode, requirement ids and layer cores (no side effects)
//! 2. Build the config document (requirement resolution, no side effects)
//! 3. Render fragments into an in-memory buffer
//! 4. Prepare the output layout and write the buffer once
//! 5. Create the placeholder files, whatever step 4 returned
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::PathBuf;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::Filesystem,
        services::{document_builder::DocumentBuilder, output_strategy::strategy_for},
    },
    domain::{
        ConfigDocument, DomainValidator as validator, InitOptions, InitRequest, LayerCatalog,
        OutputLayout, RequirementCatalog, Serializer,
    },
    error::SorspecResult,
};

/// A validated request, its document, and where it would be written.
#[derive(Debug, Clone)]
pub struct InitPlan {
    pub request: InitRequest,
    pub document: ConfigDocument,
    pub layout: OutputLayout,
    pub text: String,
}

/// What `init` wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub config_file: PathBuf,
    pub directories: Vec<PathBuf>,
    pub placeholders_created: Vec<PathBuf>,
    pub bytes_written: usize,
    /// A configuration file was already present and has been overwritten.
    pub replaced: bool,
}

/// Main `init` service.
///
/// Catalogs are injected once at construction and never change afterwards.
pub struct InitService {
    layers: LayerCatalog,
    requirements: RequirementCatalog,
    filesystem: Box<dyn Filesystem>,
}

impl InitService {
    /// Create a new init service with the given catalogs and filesystem.
    pub fn new(
        layers: LayerCatalog,
        requirements: RequirementCatalog,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            layers,
            requirements,
            filesystem,
        }
    }

    pub fn layers(&self) -> &LayerCatalog {
        &self.layers
    }

    pub fn requirements(&self) -> &RequirementCatalog {
        &self.requirements
    }

    /// Validate raw options against the catalogs.
    pub fn validate(&self, options: InitOptions) -> SorspecResult<InitRequest> {
        let requested = options.requirements.len();
        let request = validator::validate_init(options, &self.layers, &self.requirements)?;
        if request.requirements().len() < requested {
            warn!("duplicate requirement ids ignored");
        }
        Ok(request)
    }

    /// Validate, build and render without touching the filesystem.
    #[instrument(skip_all, fields(path = %options.path.display(), mode = %options.mode))]
    pub fn plan(&self, options: InitOptions) -> SorspecResult<InitPlan> {
        let request = self.validate(options)?;

        let document = DocumentBuilder::new(&self.layers, &self.requirements).build_request(&request)?;
        let bytes = Serializer::write_document(&document).map_err(|e| {
            ApplicationError::RenderingFailed {
                reason: e.to_string(),
            }
        })?;
        let text = String::from_utf8(bytes).map_err(|e| ApplicationError::RenderingFailed {
            reason: e.to_string(),
        })?;

        let layout = strategy_for(request.mode()).layout(request.base_dir());

        Ok(InitPlan {
            request,
            document,
            layout,
            text,
        })
    }

    /// Initialise a project configuration.
    ///
    /// Validation and requirement resolution complete before the first
    /// filesystem call, so their failures leave the disk untouched.
    #[instrument(skip_all, fields(path = %options.path.display()))]
    pub fn init(&self, options: InitOptions) -> SorspecResult<InitReport> {
        let plan = self.plan(options)?;
        info!(
            app = %plan.request.app_name(),
            mode = %plan.request.mode(),
            layers = plan.request.layers().len(),
            requirements = plan.request.requirements().len(),
            "Initialising project configuration"
        );

        let written = self.write_config(&plan);
        let placeholders = self.create_placeholders(&plan.layout);

        let (bytes_written, replaced) = written?;
        let placeholders_created = placeholders?;

        info!(
            path = %plan.layout.config_file().display(),
            bytes = bytes_written,
            replaced,
            "Configuration written"
        );

        Ok(InitReport {
            config_file: plan.layout.config_file().to_path_buf(),
            directories: plan.layout.directories().to_vec(),
            placeholders_created,
            bytes_written,
            replaced,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Returns the byte count and whether an existing file was replaced.
    fn write_config(&self, plan: &InitPlan) -> SorspecResult<(usize, bool)> {
        let strategy = strategy_for(plan.request.mode());
        strategy.prepare(self.filesystem.as_ref(), &plan.layout)?;

        let config_file = plan.layout.config_file();
        let replaced = self.filesystem.exists(config_file);
        if replaced {
            warn!(path = %config_file.display(), "replacing existing configuration");
        }
        self.filesystem.write_file(config_file, &plan.text)?;
        Ok((plan.text.len(), replaced))
    }

    /// Create every placeholder, attempting all of them even if one fails.
    fn create_placeholders(&self, layout: &OutputLayout) -> SorspecResult<Vec<PathBuf>> {
        let mut created = Vec::new();
        let mut first_error = None;

        for path in layout.placeholders() {
            match self.filesystem.create_file_if_missing(path) {
                Ok(true) => created.push(path.clone()),
                Ok(false) => {}
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "placeholder not created");
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(created),
        }
    }
}
