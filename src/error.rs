//! Errores recuperables del núcleo de cuadros de turno.
//!
//! Ninguna variante aborta un cálculo de vista por sí sola: los componentes
//! puros devuelven colecciones vacías y sólo las llamadas a colaboradores
//! producen `ErrorCuadro`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ErrorCuadro {
    /// Falla de un servicio colaborador (red, backend caído, respuesta inválida)
    #[error("Error del colaborador en {operacion}: {mensaje}")]
    Colaborador { operacion: String, mensaje: String },

    #[error("Cuadro no encontrado: {0}")]
    CuadroNoEncontrado(String),

    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuración inválida: {0}")]
    Configuracion(String),
}

impl ErrorCuadro {
    pub fn colaborador(operacion: &str, mensaje: impl Into<String>) -> Self {
        ErrorCuadro::Colaborador {
            operacion: operacion.to_string(),
            mensaje: mensaje.into(),
        }
    }

    /// True para fallas transitorias de un colaborador, que la vista puede reintentar
    pub fn es_recuperable(&self) -> bool {
        matches!(
            self,
            ErrorCuadro::Colaborador { .. } | ErrorCuadro::CuadroNoEncontrado(_)
        )
    }
}
