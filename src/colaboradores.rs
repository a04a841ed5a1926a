//! Servicios colaboradores que entregan las colecciones crudas.
//!
//! El núcleo no hace E/S: quien lo integra implementa `Colaboradores` sobre su
//! cliente HTTP. `ColaboradorMemoria` sirve una instantánea ya cargada y se
//! usa en el binario de inspección y en las pruebas.

use async_trait::async_trait;

use crate::api_json::DatosCuadros;
use crate::error::ErrorCuadro;
use crate::models::{Equipo, Identificador, Proceso, Turno};

#[async_trait]
pub trait Colaboradores: Send + Sync {
    /// Equipo (y sus membresías) asociado al cuadro
    async fn obtener_equipo(&self, cuadro_id: &Identificador) -> Result<Equipo, ErrorCuadro>;

    async fn obtener_turnos_cuadro(&self, cuadro_id: &Identificador) -> Result<Vec<Turno>, ErrorCuadro>;

    async fn obtener_procesos_cuadro(&self, cuadro_id: &Identificador) -> Result<Vec<Proceso>, ErrorCuadro>;
}

#[derive(Debug, Clone, Default)]
pub struct ColaboradorMemoria {
    datos: DatosCuadros,
}

impl ColaboradorMemoria {
    pub fn new(datos: DatosCuadros) -> Self {
        ColaboradorMemoria { datos }
    }

    pub fn datos(&self) -> &DatosCuadros {
        &self.datos
    }
}

#[async_trait]
impl Colaboradores for ColaboradorMemoria {
    async fn obtener_equipo(&self, cuadro_id: &Identificador) -> Result<Equipo, ErrorCuadro> {
        let cuadro = self
            .datos
            .cuadros
            .iter()
            .find(|c| &c.id == cuadro_id)
            .ok_or_else(|| ErrorCuadro::CuadroNoEncontrado(cuadro_id.to_string()))?;

        let equipo_id = cuadro.equipo_id.as_ref().ok_or_else(|| {
            ErrorCuadro::colaborador("obtener_equipo", format!("el cuadro {} no tiene equipo", cuadro_id))
        })?;

        self.datos
            .equipos
            .iter()
            .find(|e| &e.id == equipo_id)
            .cloned()
            .ok_or_else(|| {
                ErrorCuadro::colaborador("obtener_equipo", format!("equipo {} no encontrado", equipo_id))
            })
    }

    async fn obtener_turnos_cuadro(&self, cuadro_id: &Identificador) -> Result<Vec<Turno>, ErrorCuadro> {
        Ok(self
            .datos
            .turnos
            .iter()
            .filter(|t| t.cuadro_id.as_ref() == Some(cuadro_id))
            .cloned()
            .collect())
    }

    async fn obtener_procesos_cuadro(&self, cuadro_id: &Identificador) -> Result<Vec<Proceso>, ErrorCuadro> {
        Ok(self
            .datos
            .procesos
            .iter()
            .filter(|p| p.cuadro_id.as_ref() == Some(cuadro_id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_json::parse_datos;

    fn memoria() -> ColaboradorMemoria {
        let datos = parse_datos(
            r#"{
                "cuadros": [
                    { "id": 1, "nombre": "UCI", "equipoId": 7 },
                    { "id": 2, "nombre": "Sin equipo" }
                ],
                "equipos": [ { "id": "7", "miembros": [ { "personaId": 5, "perfiles": ["TENS"] } ] } ],
                "turnos": [ { "id": 1, "cuadroId": "1" }, { "id": 2, "cuadroId": 2 } ]
            }"#,
        )
        .expect("instantánea válida");
        ColaboradorMemoria::new(datos)
    }

    #[tokio::test]
    async fn test_equipo_por_cuadro() {
        let colab = memoria();
        let equipo = colab.obtener_equipo(&"1".into()).await.expect("equipo");
        assert_eq!(equipo.miembros.len(), 1);
    }

    #[tokio::test]
    async fn test_cuadro_inexistente_o_sin_equipo() {
        let colab = memoria();
        let err = colab.obtener_equipo(&"99".into()).await.unwrap_err();
        assert!(matches!(err, ErrorCuadro::CuadroNoEncontrado(_)));

        let err = colab.obtener_equipo(&"2".into()).await.unwrap_err();
        assert!(matches!(err, ErrorCuadro::Colaborador { .. }));
    }

    #[tokio::test]
    async fn test_turnos_por_cuadro() {
        let colab = memoria();
        let turnos = colab.obtener_turnos_cuadro(&"2".into()).await.expect("turnos");
        assert_eq!(turnos.len(), 1);
        assert_eq!(turnos[0].id.as_str(), "2");
    }
}
