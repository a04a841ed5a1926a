//! Paginación independiente por grupo.
//!
//! Cada clave (normalmente el nombre de la persona) tiene su propia página
//! actual y tamaño de página. Los estados se crean al primer cambio; mientras
//! no existan, las consultas devuelven los valores por defecto.
//!
//! Una página fuera de rango (por ejemplo, tras filtrar y achicar la lista)
//! NO se corrige: `paginar` devuelve una página vacía y quien llama decide si
//! ajustar.

use std::collections::HashMap;

use serde::Serialize;

use super::ventana::{calcular_ventana, ElementoPagina, RADIO_POR_DEFECTO};

/// Tamaño de página inicial de cada grupo
pub const TAMANO_PAGINA_POR_DEFECTO: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EstadoPaginacion {
    pagina: usize,
    tamano: usize,
}

impl Default for EstadoPaginacion {
    fn default() -> Self {
        EstadoPaginacion::new(TAMANO_PAGINA_POR_DEFECTO)
    }
}

impl EstadoPaginacion {
    /// Un tamaño 0 se trata como 1
    pub fn new(tamano: usize) -> Self {
        EstadoPaginacion { pagina: 1, tamano: tamano.max(1) }
    }

    /// Página actual, siempre >= 1
    pub fn pagina(&self) -> usize {
        self.pagina
    }

    /// Tamaño de página, siempre >= 1
    pub fn tamano(&self) -> usize {
        self.tamano
    }

    pub fn set_tamano(&mut self, tamano: usize) {
        self.tamano = tamano.max(1);
        self.pagina = 1;
    }

    /// Salta a `pagina` sin validar contra el total (0 se trata como 1)
    pub fn set_pagina(&mut self, pagina: usize) {
        self.pagina = pagina.max(1);
    }

    /// `ceil(cantidad / tamano)`, mínimo 1
    pub fn total_paginas(&self, cantidad: usize) -> usize {
        cantidad.div_ceil(self.tamano).max(1)
    }

    /// Porción `[(pagina-1)*tamano, pagina*tamano)` de `items`
    pub fn paginar<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let desde = self.pagina.saturating_sub(1).saturating_mul(self.tamano);
        if desde >= items.len() {
            return &[];
        }
        let hasta = desde.saturating_add(self.tamano).min(items.len());
        &items[desde..hasta]
    }

    pub fn siguiente(&mut self, cantidad: usize) {
        let total = self.total_paginas(cantidad);
        self.pagina = self.pagina.saturating_add(1).clamp(1, total);
    }

    pub fn anterior(&mut self, cantidad: usize) {
        let total = self.total_paginas(cantidad);
        self.pagina = self.pagina.saturating_sub(1).clamp(1, total);
    }

    pub fn ventana(&self, cantidad: usize, radio: usize) -> Vec<ElementoPagina> {
        calcular_ventana(self.pagina, self.total_paginas(cantidad), radio)
    }
}

/// Estados de paginación por clave de grupo, propiedad de una sola vista
#[derive(Debug, Clone)]
pub struct PaginadorGrupos {
    estados: HashMap<String, EstadoPaginacion>,
    tamano_inicial: usize,
    radio: usize,
}

impl Default for PaginadorGrupos {
    fn default() -> Self {
        PaginadorGrupos::new(TAMANO_PAGINA_POR_DEFECTO, RADIO_POR_DEFECTO)
    }
}

impl PaginadorGrupos {
    pub fn new(tamano_inicial: usize, radio: usize) -> Self {
        PaginadorGrupos {
            estados: HashMap::new(),
            tamano_inicial: tamano_inicial.max(1),
            radio,
        }
    }

    fn estado(&self, clave: &str) -> EstadoPaginacion {
        self.estados
            .get(clave)
            .copied()
            .unwrap_or_else(|| EstadoPaginacion::new(self.tamano_inicial))
    }

    fn estado_mut(&mut self, clave: &str) -> &mut EstadoPaginacion {
        let tamano_inicial = self.tamano_inicial;
        self.estados
            .entry(clave.to_string())
            .or_insert_with(|| EstadoPaginacion::new(tamano_inicial))
    }

    pub fn pagina(&self, clave: &str) -> usize {
        self.estado(clave).pagina
    }

    pub fn tamano_pagina(&self, clave: &str) -> usize {
        self.estado(clave).tamano
    }

    /// Cambia el tamaño de página de `clave` y la devuelve a la página 1
    pub fn set_tamano_pagina(&mut self, clave: &str, tamano: usize) {
        self.estado_mut(clave).set_tamano(tamano);
    }

    pub fn set_pagina(&mut self, clave: &str, pagina: usize) {
        self.estado_mut(clave).set_pagina(pagina);
    }

    pub fn paginar<'a, T>(&self, clave: &str, items: &'a [T]) -> &'a [T] {
        self.estado(clave).paginar(items)
    }

    pub fn total_paginas<T>(&self, clave: &str, items: &[T]) -> usize {
        self.estado(clave).total_paginas(items.len())
    }

    pub fn siguiente<T>(&mut self, clave: &str, items: &[T]) {
        self.estado_mut(clave).siguiente(items.len());
    }

    pub fn anterior<T>(&mut self, clave: &str, items: &[T]) {
        self.estado_mut(clave).anterior(items.len());
    }

    pub fn ventana<T>(&self, clave: &str, items: &[T]) -> Vec<ElementoPagina> {
        self.estado(clave).ventana(items.len(), self.radio)
    }

    /// Cantidad de grupos con estado propio
    pub fn len(&self) -> usize {
        self.estados.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estados.is_empty()
    }
}
