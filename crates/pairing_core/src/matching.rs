//! Exact maximum/minimum weight perfect matching on complete graphs.
//!
//! Primal-dual blossom algorithm (Edmonds, Galil) run in maximum
//! cardinality mode, O(n³). Weights are integers, so every dual variable
//! stays integral and slack comparisons are exact.
//!
//! Among optimal matchings the solver prefers the one whose partners sit
//! closest together in the input order (smallest sum of squared index
//! distances). Several matchings can share that sum; which of them comes
//! back is fixed by the input order, so equal inputs give equal outputs.

use crate::error::{PairingError, Result};

const NIL: usize = usize::MAX;

/// Index into a blossom's cyclic child list with a possibly negative offset
fn cyclic(len: usize, j: isize) -> usize {
    j.rem_euclid(len as isize) as usize
}

/// Pair up `items` so that the total weight is maximal.
///
/// Pairs come out ordered by the index of their earlier element, each pair
/// written later element first: the pairing `{0,2},{1,3}` of `[a,b,c,d]` is
/// returned as `[(c,a),(d,b)]`.
pub fn maximum_weight_perfect_matching<E, F>(items: &[E], mut weight: F) -> Result<Vec<(E, E)>>
where
    E: Clone,
    F: FnMut(&E, &E) -> i64,
{
    let n = items.len();
    if n % 2 != 0 {
        return Err(PairingError::invalid_size(
            n,
            "a perfect matching needs an even number of elements",
        ));
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    // Scale so that one unit of real weight outweighs any tie-break total.
    let scale = (n as i128 / 2) * (n as i128 - 1).pow(2) + 1;
    let mut edges = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        for j in i + 1..n {
            let distance = (j - i) as i128;
            let lifted = weight(&items[i], &items[j]) as i128 * scale - distance * distance;
            edges.push((i, j, lifted));
        }
    }

    let mate = Blossoms::new(n, edges).solve();
    let pairs: Vec<(E, E)> = mate
        .iter()
        .enumerate()
        .filter(|&(i, &j)| j != NIL && j > i)
        .map(|(i, &j)| (items[j].clone(), items[i].clone()))
        .collect();
    debug_assert_eq!(pairs.len(), n / 2);
    Ok(pairs)
}

/// Pair up `items` so that the total cost is minimal.
pub fn minimum_weight_perfect_matching<E, F>(items: &[E], mut cost: F) -> Result<Vec<(E, E)>>
where
    E: Clone,
    F: FnMut(&E, &E) -> i64,
{
    maximum_weight_perfect_matching(items, |a, b| cost(a, b).saturating_neg())
}

// =============================================================================
// Solver state
// =============================================================================

/// Vertices are `0..n`; blossoms reuse indices `n..2n`. Edge `k` has the two
/// endpoints `2k` and `2k + 1`, so `p ^ 1` is the opposite endpoint.
struct Blossoms {
    nvertex: usize,
    edges: Vec<(usize, usize, i128)>,
    endpoint: Vec<usize>,
    neighbend: Vec<Vec<usize>>,
    /// Remote endpoint of the matched edge, per vertex
    mate: Vec<usize>,
    /// 0 free, 1 outer (S), 2 inner (T), 5 marked during a scan, -1 recycled
    label: Vec<i8>,
    labelend: Vec<usize>,
    inblossom: Vec<usize>,
    blossomparent: Vec<usize>,
    blossomchilds: Vec<Vec<usize>>,
    blossombase: Vec<usize>,
    blossomendps: Vec<Vec<usize>>,
    bestedge: Vec<usize>,
    blossombestedges: Vec<Option<Vec<usize>>>,
    unusedblossoms: Vec<usize>,
    dualvar: Vec<i128>,
    allowedge: Vec<bool>,
    queue: Vec<usize>,
}

impl Blossoms {
    fn new(nvertex: usize, edges: Vec<(usize, usize, i128)>) -> Self {
        let nedge = edges.len();
        let maxweight = edges.iter().map(|e| e.2).max().unwrap_or(0).max(0);

        let endpoint = (0..2 * nedge)
            .map(|p| {
                let (i, j, _) = edges[p / 2];
                if p % 2 == 0 {
                    i
                } else {
                    j
                }
            })
            .collect();

        let mut neighbend = vec![Vec::new(); nvertex];
        for (k, &(i, j, _)) in edges.iter().enumerate() {
            neighbend[i].push(2 * k + 1);
            neighbend[j].push(2 * k);
        }

        let mut dualvar = vec![maxweight; nvertex];
        dualvar.resize(2 * nvertex, 0);

        let mut blossombase: Vec<usize> = (0..nvertex).collect();
        blossombase.resize(2 * nvertex, NIL);

        Self {
            nvertex,
            edges,
            endpoint,
            neighbend,
            mate: vec![NIL; nvertex],
            label: vec![0; 2 * nvertex],
            labelend: vec![NIL; 2 * nvertex],
            inblossom: (0..nvertex).collect(),
            blossomparent: vec![NIL; 2 * nvertex],
            blossomchilds: vec![Vec::new(); 2 * nvertex],
            blossombase,
            blossomendps: vec![Vec::new(); 2 * nvertex],
            bestedge: vec![NIL; 2 * nvertex],
            blossombestedges: vec![None; 2 * nvertex],
            unusedblossoms: (nvertex..2 * nvertex).collect(),
            dualvar,
            allowedge: vec![false; nedge],
            queue: Vec::new(),
        }
    }

    fn slack(&self, k: usize) -> i128 {
        let (i, j, w) = self.edges[k];
        self.dualvar[i] + self.dualvar[j] - 2 * w
    }

    fn blossom_leaves(&self, b: usize) -> Vec<usize> {
        let mut leaves = Vec::new();
        self.collect_leaves(b, &mut leaves);
        leaves
    }

    fn collect_leaves(&self, b: usize, leaves: &mut Vec<usize>) {
        if b < self.nvertex {
            leaves.push(b);
        } else {
            for &t in &self.blossomchilds[b] {
                self.collect_leaves(t, leaves);
            }
        }
    }

    /// Label the top-level blossom containing `w` and, for inner labels, the
    /// blossom matched to its base.
    fn assign_label(&mut self, w: usize, t: i8, p: usize) {
        let b = self.inblossom[w];
        self.label[w] = t;
        self.label[b] = t;
        self.labelend[w] = p;
        self.labelend[b] = p;
        self.bestedge[w] = NIL;
        self.bestedge[b] = NIL;
        if t == 1 {
            let leaves = self.blossom_leaves(b);
            self.queue.extend(leaves);
        } else if t == 2 {
            let base = self.blossombase[b];
            let matched = self.mate[base];
            let next = self.endpoint[matched];
            self.assign_label(next, 1, matched ^ 1);
        }
    }

    /// Trace back from `v` and `w` to find a new blossom base, or `NIL` if
    /// the two paths reach distinct roots (an augmenting path).
    fn scan_blossom(&mut self, mut v: usize, mut w: usize) -> usize {
        let mut path = Vec::new();
        let mut base = NIL;
        while v != NIL || w != NIL {
            let b = self.inblossom[v];
            if self.label[b] & 4 != 0 {
                base = self.blossombase[b];
                break;
            }
            path.push(b);
            self.label[b] = 5;
            if self.labelend[b] == NIL {
                v = NIL;
            } else {
                let t = self.endpoint[self.labelend[b]];
                let bt = self.inblossom[t];
                v = self.endpoint[self.labelend[bt]];
            }
            if w != NIL {
                std::mem::swap(&mut v, &mut w);
            }
        }
        for b in path {
            self.label[b] = 1;
        }
        base
    }

    fn add_blossom(&mut self, base: usize, k: usize) {
        let (v, w, _) = self.edges[k];
        let bb = self.inblossom[base];
        let mut bv = self.inblossom[v];
        let mut bw = self.inblossom[w];
        let Some(b) = self.unusedblossoms.pop() else {
            return;
        };
        self.blossombase[b] = base;
        self.blossomparent[b] = NIL;
        self.blossomparent[bb] = b;

        let mut path = Vec::new();
        let mut endps = Vec::new();
        while bv != bb {
            self.blossomparent[bv] = b;
            path.push(bv);
            endps.push(self.labelend[bv]);
            let next = self.endpoint[self.labelend[bv]];
            bv = self.inblossom[next];
        }
        path.push(bb);
        path.reverse();
        endps.reverse();
        endps.push(2 * k);
        while bw != bb {
            self.blossomparent[bw] = b;
            path.push(bw);
            endps.push(self.labelend[bw] ^ 1);
            let next = self.endpoint[self.labelend[bw]];
            bw = self.inblossom[next];
        }

        self.label[b] = 1;
        self.labelend[b] = self.labelend[bb];
        self.dualvar[b] = 0;
        self.blossomchilds[b] = path.clone();
        self.blossomendps[b] = endps;

        for leaf in self.blossom_leaves(b) {
            if self.label[self.inblossom[leaf]] == 2 {
                self.queue.push(leaf);
            }
            self.inblossom[leaf] = b;
        }

        let mut bestedgeto = vec![NIL; 2 * self.nvertex];
        for &child in &path {
            let nblists: Vec<Vec<usize>> = match self.blossombestedges[child].take() {
                Some(list) => vec![list],
                None => self
                    .blossom_leaves(child)
                    .into_iter()
                    .map(|leaf| self.neighbend[leaf].iter().map(|p| p / 2).collect())
                    .collect(),
            };
            for nblist in nblists {
                for k in nblist {
                    let (i, j, _) = self.edges[k];
                    let j = if self.inblossom[j] == b { i } else { j };
                    let bj = self.inblossom[j];
                    if bj != b
                        && self.label[bj] == 1
                        && (bestedgeto[bj] == NIL || self.slack(k) < self.slack(bestedgeto[bj]))
                    {
                        bestedgeto[bj] = k;
                    }
                }
            }
            self.bestedge[child] = NIL;
        }

        let best: Vec<usize> = bestedgeto.into_iter().filter(|&k| k != NIL).collect();
        self.bestedge[b] = NIL;
        for &k in &best {
            if self.bestedge[b] == NIL || self.slack(k) < self.slack(self.bestedge[b]) {
                self.bestedge[b] = k;
            }
        }
        self.blossombestedges[b] = Some(best);
    }

    fn expand_blossom(&mut self, b: usize, endstage: bool) {
        let n = self.nvertex;
        let childs = self.blossomchilds[b].clone();
        for &s in &childs {
            self.blossomparent[s] = NIL;
            if s < n {
                self.inblossom[s] = s;
            } else if endstage && self.dualvar[s] == 0 {
                self.expand_blossom(s, endstage);
            } else {
                for leaf in self.blossom_leaves(s) {
                    self.inblossom[leaf] = s;
                }
            }
        }

        if !endstage && self.label[b] == 2 {
            let len = childs.len();
            let endps = self.blossomendps[b].clone();
            let entrychild = self.inblossom[self.endpoint[self.labelend[b] ^ 1]];
            let mut j = childs.iter().position(|&c| c == entrychild).unwrap_or(0) as isize;
            let (jstep, endptrick): (isize, usize) = if j & 1 == 1 {
                j -= len as isize;
                (1, 0)
            } else {
                (-1, 1)
            };

            // Relabel the even-length path from the entry child to the base.
            let mut p = self.labelend[b];
            while j != 0 {
                let inner = self.endpoint[p ^ 1];
                self.label[inner] = 0;
                let edge_end = endps[cyclic(len, j - endptrick as isize)];
                let outer = self.endpoint[edge_end ^ endptrick ^ 1];
                self.label[outer] = 0;
                self.assign_label(inner, 2, p);
                self.allowedge[edge_end / 2] = true;
                j += jstep;
                p = endps[cyclic(len, j - endptrick as isize)] ^ endptrick;
                self.allowedge[p / 2] = true;
                j += jstep;
            }

            let bv = childs[cyclic(len, j)];
            let inner = self.endpoint[p ^ 1];
            self.label[inner] = 2;
            self.label[bv] = 2;
            self.labelend[inner] = p;
            self.labelend[bv] = p;
            self.bestedge[bv] = NIL;
            j += jstep;

            while childs[cyclic(len, j)] != entrychild {
                let bv = childs[cyclic(len, j)];
                if self.label[bv] == 1 {
                    j += jstep;
                    continue;
                }
                let reached = self
                    .blossom_leaves(bv)
                    .into_iter()
                    .find(|&leaf| self.label[leaf] != 0);
                if let Some(leaf) = reached {
                    self.label[leaf] = 0;
                    let matched = self.mate[self.blossombase[bv]];
                    let partner = self.endpoint[matched];
                    self.label[partner] = 0;
                    let end = self.labelend[leaf];
                    self.assign_label(leaf, 2, end);
                }
                j += jstep;
            }
        }

        self.label[b] = -1;
        self.labelend[b] = NIL;
        self.blossomchilds[b] = Vec::new();
        self.blossomendps[b] = Vec::new();
        self.blossombase[b] = NIL;
        self.blossombestedges[b] = None;
        self.bestedge[b] = NIL;
        self.unusedblossoms.push(b);
    }

    /// Swap matched and unmatched edges along the path from `v` to the base
    /// of blossom `b`, making `v` the new base.
    fn augment_blossom(&mut self, b: usize, v: usize) {
        let n = self.nvertex;
        let mut t = v;
        while self.blossomparent[t] != b {
            t = self.blossomparent[t];
        }
        if t >= n {
            self.augment_blossom(t, v);
        }

        let mut childs = self.blossomchilds[b].clone();
        let mut endps = self.blossomendps[b].clone();
        let len = childs.len();
        let i = childs.iter().position(|&c| c == t).unwrap_or(0);
        let mut j = i as isize;
        let (jstep, endptrick): (isize, usize) = if i & 1 == 1 {
            j -= len as isize;
            (1, 0)
        } else {
            (-1, 1)
        };

        while j != 0 {
            j += jstep;
            let child = childs[cyclic(len, j)];
            let p = endps[cyclic(len, j - endptrick as isize)] ^ endptrick;
            if child >= n {
                let end = self.endpoint[p];
                self.augment_blossom(child, end);
            }
            j += jstep;
            let child = childs[cyclic(len, j)];
            if child >= n {
                let end = self.endpoint[p ^ 1];
                self.augment_blossom(child, end);
            }
            let (a, c) = (self.endpoint[p], self.endpoint[p ^ 1]);
            self.mate[a] = p ^ 1;
            self.mate[c] = p;
        }

        childs.rotate_left(i);
        endps.rotate_left(i);
        self.blossombase[b] = self.blossombase[childs[0]];
        self.blossomchilds[b] = childs;
        self.blossomendps[b] = endps;
    }

    fn augment_matching(&mut self, k: usize) {
        let n = self.nvertex;
        let (v, w, _) = self.edges[k];
        for (start, first_end) in [(v, 2 * k + 1), (w, 2 * k)] {
            let (mut s, mut p) = (start, first_end);
            loop {
                let bs = self.inblossom[s];
                if bs >= n {
                    self.augment_blossom(bs, s);
                }
                self.mate[s] = p;
                if self.labelend[bs] == NIL {
                    break;
                }
                let t = self.endpoint[self.labelend[bs]];
                let bt = self.inblossom[t];
                s = self.endpoint[self.labelend[bt]];
                let j = self.endpoint[self.labelend[bt] ^ 1];
                if bt >= n {
                    self.augment_blossom(bt, j);
                }
                self.mate[j] = self.labelend[bt];
                p = self.labelend[bt] ^ 1;
            }
        }
    }

    /// Run all stages and return the partner vertex of every vertex.
    fn solve(mut self) -> Vec<usize> {
        let n = self.nvertex;
        for _stage in 0..n {
            self.label.fill(0);
            self.bestedge.fill(NIL);
            for best in self.blossombestedges[n..].iter_mut() {
                *best = None;
            }
            self.allowedge.fill(false);
            self.queue.clear();

            for v in 0..n {
                if self.mate[v] == NIL && self.label[self.inblossom[v]] == 0 {
                    self.assign_label(v, 1, NIL);
                }
            }

            let mut augmented = false;
            loop {
                while !augmented {
                    let Some(v) = self.queue.pop() else {
                        break;
                    };
                    let ends = self.neighbend[v].clone();
                    for p in ends {
                        let k = p / 2;
                        let w = self.endpoint[p];
                        if self.inblossom[v] == self.inblossom[w] {
                            continue;
                        }
                        let mut kslack = 0;
                        if !self.allowedge[k] {
                            kslack = self.slack(k);
                            if kslack <= 0 {
                                self.allowedge[k] = true;
                            }
                        }
                        if self.allowedge[k] {
                            if self.label[self.inblossom[w]] == 0 {
                                self.assign_label(w, 2, p ^ 1);
                            } else if self.label[self.inblossom[w]] == 1 {
                                let base = self.scan_blossom(v, w);
                                if base != NIL {
                                    self.add_blossom(base, k);
                                } else {
                                    self.augment_matching(k);
                                    augmented = true;
                                    break;
                                }
                            } else if self.label[w] == 0 {
                                self.label[w] = 2;
                                self.labelend[w] = p ^ 1;
                            }
                        } else if self.label[self.inblossom[w]] == 1 {
                            let b = self.inblossom[v];
                            if self.bestedge[b] == NIL || kslack < self.slack(self.bestedge[b]) {
                                self.bestedge[b] = k;
                            }
                        } else if self.label[w] == 0
                            && (self.bestedge[w] == NIL || kslack < self.slack(self.bestedge[w]))
                        {
                            self.bestedge[w] = k;
                        }
                    }
                }
                if augmented {
                    break;
                }

                // No augmenting path with the current duals: pick the
                // smallest dual adjustment that creates a new tight edge or
                // empties an inner blossom.
                let mut deltatype = 0;
                let mut delta: i128 = 0;
                let mut deltaedge = NIL;
                let mut deltablossom = NIL;

                for v in 0..n {
                    if self.label[self.inblossom[v]] == 0 && self.bestedge[v] != NIL {
                        let d = self.slack(self.bestedge[v]);
                        if deltatype == 0 || d < delta {
                            delta = d;
                            deltatype = 2;
                            deltaedge = self.bestedge[v];
                        }
                    }
                }
                for b in 0..2 * n {
                    if self.blossomparent[b] == NIL
                        && self.label[b] == 1
                        && self.bestedge[b] != NIL
                    {
                        let d = self.slack(self.bestedge[b]) / 2;
                        if deltatype == 0 || d < delta {
                            delta = d;
                            deltatype = 3;
                            deltaedge = self.bestedge[b];
                        }
                    }
                }
                for b in n..2 * n {
                    if self.blossombase[b] != NIL
                        && self.blossomparent[b] == NIL
                        && self.label[b] == 2
                        && (deltatype == 0 || self.dualvar[b] < delta)
                    {
                        delta = self.dualvar[b];
                        deltatype = 4;
                        deltablossom = b;
                    }
                }
                if deltatype == 0 {
                    deltatype = 1;
                    delta = self.dualvar[..n].iter().copied().min().unwrap_or(0).max(0);
                }

                for v in 0..n {
                    match self.label[self.inblossom[v]] {
                        1 => self.dualvar[v] -= delta,
                        2 => self.dualvar[v] += delta,
                        _ => {}
                    }
                }
                for b in n..2 * n {
                    if self.blossombase[b] != NIL && self.blossomparent[b] == NIL {
                        match self.label[b] {
                            1 => self.dualvar[b] += delta,
                            2 => self.dualvar[b] -= delta,
                            _ => {}
                        }
                    }
                }

                match deltatype {
                    1 => break,
                    2 => {
                        self.allowedge[deltaedge] = true;
                        let (i, j, _) = self.edges[deltaedge];
                        let outer = if self.label[self.inblossom[i]] == 0 { j } else { i };
                        self.queue.push(outer);
                    }
                    3 => {
                        self.allowedge[deltaedge] = true;
                        let (i, _, _) = self.edges[deltaedge];
                        self.queue.push(i);
                    }
                    _ => self.expand_blossom(deltablossom, false),
                }
            }

            if !augmented {
                break;
            }

            for b in n..2 * n {
                if self.blossomparent[b] == NIL
                    && self.blossombase[b] != NIL
                    && self.label[b] == 1
                    && self.dualvar[b] == 0
                {
                    self.expand_blossom(b, true);
                }
            }
        }

        self.mate
            .iter()
            .map(|&p| if p == NIL { NIL } else { self.endpoint[p] })
            .collect()
    }
}

#[cfg(test)]
#[path = "matching_tests.rs"]
mod matching_tests;
