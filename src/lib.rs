// Biblioteca raíz del crate `cuadroturnos`.
// Núcleo de agregación y filtrado de cuadros de turno: recibe las colecciones
// ya obtenidas por los colaboradores y devuelve estructuras listas para
// mostrar (grilla mensual, reportes por persona, paginación, resúmenes).
pub mod api_json;
pub mod calendario;
pub mod colaboradores;
pub mod config;
pub mod error;
pub mod fechas;
pub mod filtros;
pub mod models;
pub mod observador;
pub mod paginacion;
pub mod reportes;
pub mod servicio;

pub use colaboradores::{ColaboradorMemoria, Colaboradores};
pub use config::Configuracion;
pub use error::ErrorCuadro;
pub use filtros::{CriteriosFiltro, PipelineFiltros};
