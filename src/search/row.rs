//! Dynamic-programming rows for the weighted edit distance.
//!
//! A row belongs to one dictionary prefix `c₁..c_d`; cell `i` holds the
//! cheapest cost of turning the first `i` query characters into that prefix,
//! together with the edit trace that achieves it.

use std::rc::Rc;

use smallvec::SmallVec;

use crate::cost::{Edit, EditCostConfig};

/// Persistent edit trace, newest edit first.
///
/// Cells share their predecessors' traces, so extending one is a single
/// allocation and cloning is a reference-count bump.
#[derive(Clone, Default, Debug)]
pub(crate) struct Trace(Option<Rc<TraceLink>>);

#[derive(Debug)]
struct TraceLink {
    edit: Edit,
    prev: Trace,
}

impl Trace {
    /// Trace extended by `edit`.
    #[inline]
    pub(crate) fn push(&self, edit: Edit) -> Trace {
        Trace(Some(Rc::new(TraceLink {
            edit,
            prev: self.clone(),
        })))
    }

    /// Edits in left-to-right alignment order.
    pub(crate) fn to_vec(&self) -> Vec<Edit> {
        let mut edits = Vec::new();
        let mut current = &self.0;
        while let Some(link) = current {
            edits.push(link.edit);
            current = &link.prev.0;
        }
        edits.reverse();
        edits
    }
}

// Unlinks the chain in a loop; the derived drop would recurse once per edit.
impl Drop for Trace {
    fn drop(&mut self) {
        let mut next = self.0.take();
        while let Some(link) = next {
            match Rc::try_unwrap(link) {
                Ok(mut link) => next = link.prev.0.take(),
                Err(_) => break,
            }
        }
    }
}

/// One DP cell: the best cost and how it was reached.
#[derive(Clone, Debug)]
pub(crate) struct Cell {
    pub(crate) cost: f64,
    pub(crate) trace: Trace,
}

/// A DP row, indexed by the number of query characters consumed.
#[derive(Clone, Debug)]
pub(crate) struct Row {
    cells: Vec<Cell>,
    min: f64,
}

impl Row {
    /// Smallest cost in the row; the lower bound for every extension.
    #[inline]
    pub(crate) fn min_cost(&self) -> f64 {
        self.min
    }

    /// Cell for the whole query.
    #[inline]
    pub(crate) fn last(&self) -> &Cell {
        // Rows always hold |query| + 1 cells.
        &self.cells[self.cells.len() - 1]
    }

    #[cfg(test)]
    pub(crate) fn costs(&self) -> Vec<f64> {
        self.cells.iter().map(|cell| cell.cost).collect()
    }
}

/// Builds rows for one query under one cost model.
pub(crate) struct RowBuilder<'c> {
    query: SmallVec<[char; 32]>,
    delete_costs: SmallVec<[f64; 32]>,
    costs: &'c EditCostConfig,
}

impl<'c> RowBuilder<'c> {
    pub(crate) fn new(query: &str, costs: &'c EditCostConfig) -> Self {
        let query: SmallVec<[char; 32]> = query.chars().collect();
        let delete_costs = query
            .iter()
            .map(|&c| costs.cost_of(&Edit::delete(c)))
            .collect();

        RowBuilder {
            query,
            delete_costs,
            costs,
        }
    }

    /// Query length in characters.
    pub(crate) fn query_len(&self) -> usize {
        self.query.len()
    }

    /// Row for the empty prefix: every query character deleted.
    pub(crate) fn root(&self) -> Row {
        let mut cells = Vec::with_capacity(self.query.len() + 1);
        cells.push(Cell {
            cost: 0.0,
            trace: Trace::default(),
        });

        for (i, &source) in self.query.iter().enumerate() {
            let prev = &cells[i];
            let cell = Cell {
                cost: prev.cost + self.delete_costs[i],
                trace: prev.trace.push(Edit::delete(source)),
            };
            cells.push(cell);
        }

        // Costs are non-negative, so cell 0 is the minimum.
        Row { cells, min: 0.0 }
    }

    /// Row for `parent`'s prefix extended by `label`.
    ///
    /// Each cell takes the cheapest of three predecessors. Ties go to
    /// match/substitute first, then delete, then insert.
    pub(crate) fn step(&self, parent: &Row, label: char) -> Row {
        let insert_edit = Edit::insert(label);
        let insert_cost = self.costs.cost_of(&insert_edit);

        let mut cells: Vec<Cell> = Vec::with_capacity(parent.cells.len());
        let first = Cell {
            cost: parent.cells[0].cost + insert_cost,
            trace: parent.cells[0].trace.push(insert_edit),
        };
        let mut min = first.cost;
        cells.push(first);

        for i in 1..parent.cells.len() {
            let source = self.query[i - 1];

            let diagonal = &parent.cells[i - 1];
            let diagonal_cost = diagonal.cost + self.costs.cost_between(source, label);
            let delete_cost = cells[i - 1].cost + self.delete_costs[i - 1];
            let above_cost = parent.cells[i].cost + insert_cost;

            let cell = if diagonal_cost <= delete_cost && diagonal_cost <= above_cost {
                let trace = if source == label {
                    diagonal.trace.clone()
                } else {
                    diagonal.trace.push(Edit::substitute(source, label))
                };
                Cell {
                    cost: diagonal_cost,
                    trace,
                }
            } else if delete_cost <= above_cost {
                Cell {
                    cost: delete_cost,
                    trace: cells[i - 1].trace.push(Edit::delete(source)),
                }
            } else {
                Cell {
                    cost: above_cost,
                    trace: parent.cells[i].trace.push(insert_edit),
                }
            };

            if cell.cost < min {
                min = cell.cost;
            }
            cells.push(cell);
        }

        Row { cells, min }
    }
}
