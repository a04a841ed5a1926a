// Paginación de listas: ventana de indicadores y estado por grupo
pub mod ventana;
pub mod grupos;

pub use ventana::{calcular_ventana, ElementoPagina, RADIO_POR_DEFECTO};
pub use grupos::{EstadoPaginacion, PaginadorGrupos, TAMANO_PAGINA_POR_DEFECTO};
