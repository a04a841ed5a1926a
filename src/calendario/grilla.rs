use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use super::indice::IndiceFechas;

/// Un día de la grilla mensual
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaCalendario {
    pub fecha: NaiveDate,
    pub en_mes_objetivo: bool,
    pub numero_dia: u32,
}

/// Una fila de la grilla: siempre 7 días, lunes a domingo
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanaCalendario {
    /// 1, 2, 3... en orden cronológico dentro de la grilla
    pub indice: usize,
    pub dias: Vec<DiaCalendario>,
    pub total_horas: f64,
}

impl SemanaCalendario {
    pub fn primer_dia(&self) -> Option<NaiveDate> {
        self.dias.first().map(|d| d.fecha)
    }

    pub fn ultimo_dia(&self) -> Option<NaiveDate> {
        self.dias.last().map(|d| d.fecha)
    }
}

/// Primer y último día del mes. `mes`: 0 (enero) a 11 (diciembre).
fn limites_del_mes(anio: i32, mes: u32) -> Option<(NaiveDate, NaiveDate)> {
    if mes > 11 {
        return None;
    }
    let primero = NaiveDate::from_ymd_opt(anio, mes + 1, 1)?;
    let siguiente = if mes == 11 {
        NaiveDate::from_ymd_opt(anio.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(anio, mes + 2, 1)?
    };
    Some((primero, siguiente.pred_opt()?))
}

/// Lunes en o antes de `fecha` (el domingo retrocede 6 días).
/// `None` si ese lunes cae antes de `NaiveDate::MIN`.
pub fn lunes_de_la_semana(fecha: NaiveDate) -> Option<NaiveDate> {
    fecha.checked_sub_signed(Duration::days(fecha.weekday().num_days_from_monday() as i64))
}

/// Construye las semanas (lunes a domingo) que cubren el mes.
///
/// ```text
/// Febrero 2024 (mes = 1)
/// Lu Ma Mi Ju Vi Sa Do
/// 29 30 31  1  2  3  4   <- semana 1, incluye días de enero
///  5  6  7  8  9 10 11
/// 12 13 14 15 16 17 18
/// 19 20 21 22 23 24 25
/// 26 27 28 29  1  2  3   <- semana 5, incluye días de marzo
/// ```
///
/// Los días de meses vecinos se conservan (`en_mes_objetivo = false`) y sus
/// turnos también suman al total de horas de la semana. Un mes inválido
/// devuelve una grilla vacía.
pub fn construir_mes(anio: i32, mes: u32, indice: &IndiceFechas<'_>) -> Vec<SemanaCalendario> {
    let Some((primero, ultimo)) = limites_del_mes(anio, mes) else {
        log::warn!("Mes inválido para la grilla: anio={} mes={} (se espera 0-11)", anio, mes);
        return Vec::new();
    };

    let Some(mut cursor) = lunes_de_la_semana(primero) else {
        log::warn!("La grilla de {}/{} empieza antes de la primera fecha representable", mes + 1, anio);
        return Vec::new();
    };
    let mut semanas = Vec::new();

    loop {
        let mut dias = Vec::with_capacity(7);
        let mut total_horas = 0.0;
        for _ in 0..7 {
            total_horas += indice.horas_del_dia(cursor);
            dias.push(DiaCalendario {
                fecha: cursor,
                en_mes_objetivo: cursor.month0() == mes,
                numero_dia: cursor.day(),
            });
            match cursor.succ_opt() {
                Some(siguiente) => cursor = siguiente,
                None => {
                    log::warn!("La grilla de {}/{} termina después de la última fecha representable", mes + 1, anio);
                    return Vec::new();
                }
            }
        }
        semanas.push(SemanaCalendario {
            indice: semanas.len() + 1,
            dias,
            total_horas,
        });

        // la semana recién emitida ya contiene el último día del mes
        if cursor > ultimo {
            break;
        }
    }

    semanas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Turno;
    use chrono::Weekday;
    use chrono_tz::America::Santiago;

    fn fecha(a: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(a, m, d).unwrap()
    }

    #[test]
    fn test_febrero_bisiesto() {
        let semanas = construir_mes(2024, 1, &IndiceFechas::default());
        assert_eq!(semanas.len(), 5);
        assert_eq!(semanas[0].primer_dia(), Some(fecha(2024, 1, 29)));
        assert_eq!(semanas[4].ultimo_dia(), Some(fecha(2024, 3, 3)));
        assert!(!semanas[0].dias[0].en_mes_objetivo);
        assert!(semanas[0].dias[3].en_mes_objetivo);
        assert_eq!(semanas[0].dias[3].numero_dia, 1);
        let indices: Vec<usize> = semanas.iter().map(|s| s.indice).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_mes_de_cuatro_y_seis_semanas() {
        // febrero 2021 empieza lunes y tiene 28 días
        assert_eq!(construir_mes(2021, 1, &IndiceFechas::default()).len(), 4);
        // septiembre 2024 empieza domingo y tiene 30 días
        let sep = construir_mes(2024, 8, &IndiceFechas::default());
        assert_eq!(sep.len(), 6);
        assert_eq!(sep[0].primer_dia(), Some(fecha(2024, 8, 26)));
    }

    #[test]
    fn test_diciembre_cruza_el_anio() {
        let dic = construir_mes(2024, 11, &IndiceFechas::default());
        assert_eq!(dic.len(), 6);
        assert_eq!(dic.last().and_then(|s| s.ultimo_dia()), Some(fecha(2025, 1, 5)));
    }

    #[test]
    fn test_propiedades_de_todos_los_meses() {
        for anio in 2019..=2030 {
            for mes in 0..12u32 {
                let semanas = construir_mes(anio, mes, &IndiceFechas::default());
                assert!((4..=6).contains(&semanas.len()), "{}-{}", anio, mes);
                let dias: Vec<NaiveDate> = semanas
                    .iter()
                    .flat_map(|s| s.dias.iter().map(|d| d.fecha))
                    .collect();
                assert_eq!(dias[0].weekday(), Weekday::Mon);
                assert!(dias.windows(2).all(|w| w[1] - w[0] == Duration::days(1)));
                let (primero, ultimo) = limites_del_mes(anio, mes).unwrap();
                assert!(dias.contains(&primero) && dias.contains(&ultimo));
                assert!(semanas.iter().all(|s| s.dias.len() == 7));
            }
        }
    }

    #[test]
    fn test_horas_por_semana_incluyen_meses_vecinos() {
        let turnos = vec![
            Turno {
                inicio: Some("2024-01-30T08:00:00".into()),
                total_horas: Some(12.0),
                ..Default::default()
            },
            Turno {
                inicio: Some("2024-02-01T20:00:00".into()),
                fin: Some("2024-02-02T08:00:00".into()),
                ..Default::default()
            },
            Turno {
                inicio: Some("2024-02-06T08:00:00".into()),
                total_horas: Some(6.0),
                ..Default::default()
            },
        ];
        let indice = IndiceFechas::construir(&turnos, Santiago);
        let semanas = construir_mes(2024, 1, &indice);
        assert_eq!(semanas[0].total_horas, 24.0);
        assert_eq!(semanas[1].total_horas, 6.0);
        assert_eq!(semanas[2].total_horas, 0.0);
    }

    #[test]
    fn test_mes_invalido_grilla_vacia() {
        assert!(construir_mes(2024, 12, &IndiceFechas::default()).is_empty());
    }

    #[test]
    fn test_limites_del_calendario_representable() {
        let vacio = IndiceFechas::default();
        // enero del primer año representable: su lunes puede caer antes de MIN
        let primero = construir_mes(NaiveDate::MIN.year(), 0, &vacio);
        assert!(primero.is_empty() || primero[0].primer_dia() == Some(NaiveDate::MIN));
        assert!(construir_mes(-262143, 0, &vacio).len() <= 6);
        assert!(construir_mes(NaiveDate::MIN.year() - 1, 0, &vacio).is_empty());
        // diciembre del último año representable no tiene mes siguiente
        assert!(construir_mes(NaiveDate::MAX.year(), 11, &vacio).is_empty());
        assert!(construir_mes(i32::MAX, 11, &vacio).is_empty());
        assert!(construir_mes(i32::MIN, 0, &vacio).is_empty());
        assert_eq!(lunes_de_la_semana(fecha(2024, 6, 2)), Some(fecha(2024, 5, 27)));
    }
}
