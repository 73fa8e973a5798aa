/// One DP state: the cheapest subset of a given size ending at a given rank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Cell {
    /// Energy of the subset, `+inf` if no finite-energy subset reaches here.
    pub(super) energy: f64,

    /// Rank of the previous selected point, `None` for size-1 subsets.
    pub(super) prev: Option<usize>,
}

impl Cell {
    pub(super) const UNREACHABLE: Self = Self {
        energy: f64::INFINITY,
        prev: None,
    };

    const SINGLETON: Self = Self {
        energy: 0.0,
        prev: None,
    };

    pub(super) fn is_reachable(&self) -> bool {
        self.energy.is_finite()
    }
}

/// The DP table, one layer per subset size.
///
/// Layer `l` holds subsets of size `l + 1`. Cells store only a predecessor
/// rank, so the subset behind a cell is recovered with [`Table::chain`].
#[derive(Debug)]
pub(super) struct Table {
    n: usize,
    cells: Vec<Cell>,
}

impl Table {
    /// Creates a table with `layers` layers over `n` ranks.
    ///
    /// The first layer holds zero-energy singletons; every other cell starts
    /// unreachable.
    pub(super) fn new(layers: usize, n: usize) -> Self {
        let mut cells = vec![Cell::UNREACHABLE; layers * n];
        let singletons = n.min(cells.len());
        cells[..singletons].fill(Cell::SINGLETON);
        Self { n, cells }
    }

    pub(super) fn cell(&self, layer: usize, rank: usize) -> Cell {
        self.cells[layer * self.n + rank]
    }

    pub(super) fn set(&mut self, layer: usize, rank: usize, cell: Cell) {
        self.cells[layer * self.n + rank] = cell;
    }

    /// Walks the subset behind `(layer, rank)` from its last rank to its first.
    pub(super) fn chain(&self, layer: usize, rank: usize) -> Chain<'_> {
        Chain {
            table: self,
            next: Some((layer, rank)),
        }
    }

    /// Returns the cheapest reachable cell in `layer` as `(rank, energy)`.
    ///
    /// Ranks are scanned in increasing order and only a strictly smaller
    /// energy replaces the current best.
    pub(super) fn best_in_layer(&self, layer: usize) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for rank in layer..self.n {
            let cell = self.cell(layer, rank);
            if !cell.is_reachable() {
                continue;
            }
            if best.is_none_or(|(_, energy)| cell.energy < energy) {
                best = Some((rank, cell.energy));
            }
        }
        best
    }

    /// Returns the ranks of the subset behind `(layer, rank)` in increasing order.
    pub(super) fn reconstruct(&self, layer: usize, rank: usize) -> Vec<usize> {
        let mut ranks: Vec<usize> = self.chain(layer, rank).collect();
        ranks.reverse();
        ranks
    }
}

/// Iterator over the ranks of a stored subset, last rank first.
pub(super) struct Chain<'a> {
    table: &'a Table,
    next: Option<(usize, usize)>,
}

impl Iterator for Chain<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let (layer, rank) = self.next?;
        self.next = self
            .table
            .cell(layer, rank)
            .prev
            .map(|prev| (layer - 1, prev));
        Some(rank)
    }
}
