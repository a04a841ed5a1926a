// Canal de observabilidad inyectado en las etapas que fallan en abierto.

use crate::error::ErrorCuadro;

pub trait Observador: Send + Sync {
    /// Una etapa se omitió por un error recuperable; el resultado previo sigue su curso
    fn etapa_omitida(&self, etapa: &str, error: &ErrorCuadro);
}

/// Reenvía los avisos al logger de la aplicación
#[derive(Debug, Clone, Copy, Default)]
pub struct ObservadorLog;

impl Observador for ObservadorLog {
    fn etapa_omitida(&self, etapa: &str, error: &ErrorCuadro) {
        log::warn!("Etapa '{}' omitida, se devuelven los turnos sin filtrar: {}", etapa, error);
    }
}
