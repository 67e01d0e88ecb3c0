//! Die geordnete Kurvenmenge der Komposition.
//!
//! Einfügereihenfolge = Z-Order: später erstellte Kurven liegen oben.
//! IDs werden monoton vergeben und nie wiederverwendet, damit ein
//! veralteter Drag-Zustand nie eine neue Kurve treffen kann.

use super::{Curve, CurveKind, CurveParams};
use glam::DVec2;
use indexmap::IndexMap;

/// Maximale Anzahl Kurven in einer Komposition.
pub const MAX_CURVES: usize = 15;

/// Round-Robin-Farbpalette für neue Kurven (RGBA).
pub const CURVE_PALETTE: [[f32; 4]; 7] = [
    [0.231, 0.510, 0.965, 1.0], // Blau
    [0.937, 0.267, 0.267, 1.0], // Rot
    [0.063, 0.725, 0.506, 1.0], // Smaragd
    [0.961, 0.620, 0.043, 1.0], // Bernstein
    [0.545, 0.361, 0.965, 1.0], // Violett
    [0.925, 0.282, 0.600, 1.0], // Pink
    [0.024, 0.714, 0.831, 1.0], // Cyan
];

/// Container für alle Kurven, geordnet nach Erstellungsreihenfolge.
#[derive(Debug, Clone)]
pub struct CurveSet {
    curves: IndexMap<u64, Curve>,
    next_id: u64,
}

impl Default for CurveSet {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveSet {
    /// Erstellt eine leere Kurvenmenge.
    pub fn new() -> Self {
        Self {
            curves: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Erstellt die Start-Komposition: eine Standard-Normalverteilung.
    pub fn with_standard_normal() -> Self {
        let mut set = Self::new();
        let id = set.allocate_id();
        set.curves.insert(
            id,
            Curve::new(
                id,
                "Standard Normal",
                CurveParams::Gaussian {
                    mean: 0.0,
                    sigma: 1.0,
                    amplitude: 5.0,
                },
                CURVE_PALETTE[0],
            ),
        );
        set
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Erstellt eine neue Kurve mit generierten Defaults nahe dem View-Zentrum
    /// und Round-Robin-Farbe. Gibt `None` zurück, wenn das Limit erreicht ist.
    pub fn add_curve(&mut self, kind: CurveKind, pan_offset: DVec2) -> Option<u64> {
        if self.curves.len() >= MAX_CURVES {
            return None;
        }
        let id = self.allocate_id();
        let name = format!("Curve {}", self.curves.len() + 1);
        let color = CURVE_PALETTE[self.curves.len() % CURVE_PALETTE.len()];
        let params = CurveParams::default_for(kind, pan_offset);
        self.curves.insert(id, Curve::new(id, name, params, color));
        Some(id)
    }

    /// Fügt eine vorgefertigte Kurve ein (Test-Setup, Import).
    /// Hält den ID-Zähler konsistent, damit keine ID doppelt vergeben wird.
    pub fn insert(&mut self, curve: Curve) {
        self.next_id = self.next_id.max(curve.id + 1);
        self.curves.insert(curve.id, curve);
    }

    /// Entfernt eine Kurve unter Erhalt der Z-Order der übrigen.
    pub fn remove_curve(&mut self, id: u64) -> Option<Curve> {
        self.curves.shift_remove(&id)
    }

    /// Entfernt alle Kurven.
    pub fn clear(&mut self) {
        self.curves.clear();
    }

    /// Sucht eine Kurve per ID — O(1).
    pub fn get(&self, id: u64) -> Option<&Curve> {
        self.curves.get(&id)
    }

    /// Sucht eine Kurve per ID (mutabel) — O(1).
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Curve> {
        self.curves.get_mut(&id)
    }

    /// Prüft ob eine Kurve mit dieser ID existiert.
    pub fn contains(&self, id: u64) -> bool {
        self.curves.contains_key(&id)
    }

    /// Iterator über alle Kurven in Z-Order (unterste zuerst).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Curve> {
        self.curves.values()
    }

    /// Position einer Kurve in der Z-Order.
    pub fn index_of(&self, id: u64) -> Option<usize> {
        self.curves.get_index_of(&id)
    }

    /// Verschiebt die Kurve an Index `from` nach Index `to`; alle anderen
    /// rücken entsprechend nach. Reine Permutation, `from == to` ist ein No-op.
    /// Gibt `false` zurück bei ungültigen Indizes.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from >= self.curves.len() || to >= self.curves.len() {
            return false;
        }
        if from != to {
            self.curves.move_index(from, to);
        }
        true
    }

    /// Gibt die Anzahl der Kurven zurück.
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Gibt `true` zurück, wenn keine Kurven vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}
