use axum::extract::FromRef;
use fxhash::FxHashMap;
use std::any::TypeId;
use std::ops::Deref;
use std::sync::Arc;
use thiserror::Error;
use wichtel_domain::config::AppConfig;
use wichtel_domain::registry::{FeatureSlice, InitializedSlice};

/// Failures while assembling or querying the application state.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("State validation error: {0}")]
    Validation(&'static str),
    #[error("State missing feature slice: {0}")]
    MissingSlice(&'static str),
}

#[derive(Debug)]
pub struct AppStateInner {
    pub config: AppConfig,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

/// Cheaply cloneable handle to the immutable application state.
///
/// Feature slices carry their own interior mutability; the state container
/// itself never changes after [`AppStateBuilder::build`].
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

impl AppState {
    #[must_use]
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::default()
    }

    #[must_use]
    pub fn get_slice<T: FeatureSlice>(&self) -> Option<&T> {
        self.inner
            .slices
            .get(&TypeId::of::<T>())
            .and_then(|initialized| initialized.downcast_ref::<T>())
    }

    /// Returns a reference to the slice if it is registered.
    ///
    /// # Errors
    /// Returns an error if the slice is not registered.
    pub fn try_get_slice<T: FeatureSlice>(&self) -> Result<&T, StateError> {
        self.get_slice::<T>()
            .ok_or_else(|| StateError::MissingSlice(std::any::type_name::<T>()))
    }
}

impl Deref for AppState {
    type Target = AppStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(state: &AppState) -> Self {
        state.inner.config.clone()
    }
}

#[derive(Debug, Default)]
pub struct AppStateBuilder {
    config: Option<AppConfig>,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn register_slice(mut self, slice: InitializedSlice) -> Self {
        self.slices.insert(slice.id, slice);
        self
    }

    /// Registers multiple slices at once.
    #[must_use]
    pub fn register_slices<I>(mut self, slices: I) -> Self
    where
        I: IntoIterator<Item = InitializedSlice>,
    {
        for slice in slices {
            self.slices.insert(slice.id, slice);
        }
        self
    }

    /// Finalizes the state.
    ///
    /// # Errors
    /// Returns [`StateError::Validation`] if no configuration was provided.
    pub fn build(self) -> Result<AppState, StateError> {
        let config = self.config.ok_or(StateError::Validation("AppConfig not provided"))?;

        Ok(AppState { inner: Arc::new(AppStateInner { config, slices: self.slices }) })
    }
}
