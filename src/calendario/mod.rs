// Vista de calendario: índice de turnos por fecha y grilla mensual
pub mod indice;
pub mod grilla;

pub use indice::IndiceFechas;
pub use grilla::{construir_mes, lunes_de_la_semana, DiaCalendario, SemanaCalendario};
