//! Evaluates one reading of a winning hand (a [`Decomposition`], or the chiitoitsu/kokushi
//! shape) against the surrounding game context, producing every satisfied yaku plus fu.
//!
//! Grounded on the same "count-vector first, tile-identity only at the boundary" approach as
//! [`crate::decomp`]: everything here works over `TileType`, consulting actual [`Tile`] identity
//! only to find red fives for the aka-dora count.

use crate::decomp::{ConcealedSet, Decomposition};
use crate::hand::Hand;
use crate::meld::Meld;
use crate::tile::{Tile, TileType, DRAGON_CHUN, DRAGON_HAKU, DRAGON_HATSU, WIND_E, WIND_N};
use crate::yaku::known::{Yaku, AKA_DORA_ID, DORA_ID, URA_DORA_ID};

const DRAGONS: [TileType; 3] = [DRAGON_HAKU, DRAGON_HATSU, DRAGON_CHUN];
const WINDS: [TileType; 4] = [WIND_E, WIND_E + 1, WIND_E + 2, WIND_N];
/// The five sou tile types that belong to ryuuiisou (2,3,4,6,8s) plus the green dragon.
const GREEN_TYPES: [TileType; 6] = [19, 20, 21, 23, 25, DRAGON_HATSU];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WaitKind {
    Ryanmen,
    Kanchan,
    Penchan,
    Tanki,
    Shanpon,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WinMethod {
    Tsumo,
    Ron,
}

pub struct EvalContext {
    pub win_tile: Tile,
    pub method: WinMethod,
    pub is_riichi: bool,
    pub is_double_riichi: bool,
    pub is_ippatsu: bool,
    pub is_haitei: bool,
    pub is_houtei: bool,
    pub is_rinshan: bool,
    pub is_chankan: bool,
    pub is_tenhou: bool,
    pub is_chiihou: bool,
    pub seat_wind: TileType,
    pub round_wind: TileType,
    pub dora_types: Vec<TileType>,
    pub ura_dora_types: Vec<TileType>,
}

#[derive(Copy, Clone, Debug)]
pub struct YakuHit {
    pub id: u16,
    pub name: &'static str,
    pub han: u8,
}

#[derive(Debug, Default)]
pub struct YakuResult {
    pub hits: Vec<YakuHit>,
    pub fu: u32,
    pub han: u32,
    pub yakuman_units: u8,
}

impl YakuResult {
    pub fn has_yaku(&self) -> bool { !self.hits.is_empty() }
}

struct Group {
    tile_type: TileType,
    is_sequence: bool,
    is_kan: bool,
    opened: bool,
}

impl Group {
    fn tile_types(&self) -> Vec<TileType> {
        if self.is_sequence {
            vec![self.tile_type, self.tile_type + 1, self.tile_type + 2]
        } else {
            vec![self.tile_type; 3]
        }
    }
}

fn groups_from_melds(melds: &[Meld]) -> Vec<Group> {
    melds.iter().map(|m| match m {
        Meld::Chi(_) => Group { tile_type: m.tile_type(), is_sequence: true, is_kan: false, opened: true },
        Meld::Pon(_) => Group { tile_type: m.tile_type(), is_sequence: false, is_kan: false, opened: true },
        Meld::Daiminkan(_) => Group { tile_type: m.tile_type(), is_sequence: false, is_kan: true, opened: true },
        Meld::Ankan(_) => Group { tile_type: m.tile_type(), is_sequence: false, is_kan: true, opened: false },
        Meld::Kakan(_) => Group { tile_type: m.tile_type(), is_sequence: false, is_kan: true, opened: true },
    }).collect()
}

fn groups_from_concealed(sets: &[ConcealedSet]) -> Vec<Group> {
    sets.iter().map(|s| match s {
        ConcealedSet::Sequence(t) => Group { tile_type: *t, is_sequence: true, is_kan: false, opened: false },
        ConcealedSet::Triplet(t) => Group { tile_type: *t, is_sequence: false, is_kan: false, opened: false },
    }).collect()
}

fn classify_wait(decomp: &Decomposition, win_type: TileType) -> WaitKind {
    if decomp.pair == win_type && !decomp.sets.iter().any(|s| matches!(s, ConcealedSet::Triplet(t) if *t == win_type)) {
        return WaitKind::Tanki;
    }
    for set in &decomp.sets {
        match set {
            ConcealedSet::Triplet(t) if *t == win_type => return WaitKind::Shanpon,
            ConcealedSet::Sequence(start) => {
                let rank = |t: TileType| t % 9;
                if *start == win_type {
                    return if rank(*start) == 6 { WaitKind::Penchan } else { WaitKind::Ryanmen };
                }
                if *start + 1 == win_type {
                    return WaitKind::Kanchan;
                }
                if *start + 2 == win_type {
                    return if rank(*start) == 0 { WaitKind::Penchan } else { WaitKind::Ryanmen };
                }
            }
            _ => {}
        }
    }
    unreachable!("win tile must belong to the pair or one set")
}

fn is_terminal_or_honor(t: TileType) -> bool {
    t >= 27 || t % 9 == 0 || t % 9 == 8
}
fn is_honor(t: TileType) -> bool { t >= 27 }
fn is_terminal(t: TileType) -> bool { t < 27 && (t % 9 == 0 || t % 9 == 8) }

/// Evaluates the standard-shape reading of a hand (one [`Decomposition`] of the concealed
/// portion, plus the caller's melds). Returns `None` only if `win_tile`'s type cannot be located
/// in the decomposition (a caller bug, never a legitimate "no yaku" case: that is represented by
/// an empty [`YakuResult::hits`]).
pub fn evaluate_standard(
    hand: &Hand,
    melds: &[Meld],
    decomp: &Decomposition,
    ctx: &EvalContext,
) -> YakuResult {
    let is_concealed = melds.iter().all(|m| !m.is_opened());
    let win_type = ctx.win_tile.tile_type();
    let wait = classify_wait(decomp, win_type);

    let mut groups = groups_from_concealed(&decomp.sets);
    groups.extend(groups_from_melds(melds));

    let mut hits: Vec<YakuHit> = Vec::new();

    // --- Yakuman shapes first (they exclude ordinary yaku scoring, but we still compute fu=0) ---
    if let Some(yakuman) = check_yakuman(hand, melds, &groups, decomp, ctx, wait, is_concealed) {
        let mut result = YakuResult::default();
        result.yakuman_units = yakuman.iter().map(|y| y.yakuman_value()).sum();
        result.hits = yakuman.iter().map(|y| YakuHit { id: y.id(), name: y.as_ref(), han: 0 }).collect();
        return result;
    }

    // --- Situational yaku ---
    if ctx.is_double_riichi { hits.push(hit(Yaku::DoubleRiichi, is_concealed)); }
    else if ctx.is_riichi { hits.push(hit(Yaku::Riichi, is_concealed)); }
    if ctx.is_ippatsu { hits.push(hit(Yaku::Ippatsu, is_concealed)); }
    if ctx.is_chankan { hits.push(hit(Yaku::Chankan, is_concealed)); }
    if ctx.is_rinshan { hits.push(hit(Yaku::Rinshankaihou, is_concealed)); }
    if ctx.is_haitei { hits.push(hit(Yaku::Haitei, is_concealed)); }
    if ctx.is_houtei { hits.push(hit(Yaku::Houtei, is_concealed)); }
    if matches!(ctx.method, WinMethod::Tsumo) && is_concealed { hits.push(hit(Yaku::MenzenTsumo, is_concealed)); }

    // --- Yakuhai ---
    for g in groups.iter().filter(|g| !g.is_sequence) {
        if g.tile_type == DRAGON_HAKU { hits.push(hit(Yaku::YakuhaiHaku, is_concealed)); }
        if g.tile_type == DRAGON_HATSU { hits.push(hit(Yaku::YakuhaiHatsu, is_concealed)); }
        if g.tile_type == DRAGON_CHUN { hits.push(hit(Yaku::YakuhaiChun, is_concealed)); }
        if g.tile_type == ctx.round_wind {
            hits.push(hit(round_wind_yaku(ctx.round_wind), is_concealed));
        }
        if g.tile_type == ctx.seat_wind {
            hits.push(hit(seat_wind_yaku(ctx.seat_wind), is_concealed));
        }
    }

    // --- Pinfu / Iipeikou / Ryanpeikou (closed-hand shapes) ---
    let all_sequences = groups.iter().all(|g| g.is_sequence);
    let pair_is_yakuhai = is_dragon(decomp.pair) || decomp.pair == ctx.round_wind || decomp.pair == ctx.seat_wind;
    let is_pinfu = is_concealed && all_sequences && !pair_is_yakuhai && wait == WaitKind::Ryanmen;
    if is_pinfu { hits.push(hit(Yaku::Pinfu, is_concealed)); }

    if is_concealed {
        let mut seq_starts: Vec<TileType> = decomp.sets.iter()
            .filter_map(|s| if let ConcealedSet::Sequence(t) = s { Some(*t) } else { None })
            .collect();
        seq_starts.sort_unstable();
        let mut pair_count = 0;
        let mut i = 0;
        while i + 1 < seq_starts.len() {
            if seq_starts[i] == seq_starts[i + 1] { pair_count += 1; i += 2; } else { i += 1; }
        }
        if pair_count >= 2 { hits.push(hit(Yaku::Ryanpeikou, is_concealed)); }
        else if pair_count == 1 { hits.push(hit(Yaku::Iipeikou, is_concealed)); }
    }

    // --- Tanyao ---
    let all_simple = groups.iter().all(|g| g.tile_types().iter().all(|t| !is_terminal_or_honor(*t)))
        && !is_terminal_or_honor(decomp.pair);
    if all_simple { hits.push(hit(Yaku::Tanyao, is_concealed)); }

    // --- Toitoi / Sanankou ---
    let all_triplets = groups.iter().all(|g| !g.is_sequence);
    if all_triplets { hits.push(hit(Yaku::Toitoi, is_concealed)); }
    let concealed_triplet_count = groups.iter()
        .filter(|g| !g.is_sequence && !g.opened)
        .filter(|g| !(g.tile_type == win_type && wait == WaitKind::Shanpon && matches!(ctx.method, WinMethod::Ron)))
        .count();
    if concealed_triplet_count >= 3 { hits.push(hit(Yaku::Sanankou, is_concealed)); }

    // --- Honroutou ---
    if groups.iter().all(|g| g.tile_types().iter().all(|t| is_terminal_or_honor(*t))) && is_terminal_or_honor(decomp.pair) {
        hits.push(hit(Yaku::Honroutou, is_concealed));
    }

    // --- Chanta / Junchan ---
    let every_group_has_terminal = groups.iter().all(|g| g.tile_types().iter().any(|t| is_terminal(*t) || is_honor(*t)))
        && (is_terminal(decomp.pair) || is_honor(decomp.pair));
    if every_group_has_terminal {
        let no_honors = groups.iter().all(|g| g.tile_types().iter().all(|t| !is_honor(*t))) && !is_honor(decomp.pair);
        if no_honors { hits.push(hit(Yaku::Junchan, is_concealed)); } else { hits.push(hit(Yaku::Chanta, is_concealed)); }
    }

    // --- Ittsu ---
    for suit_base in [0u8, 9, 18] {
        let starts: std::collections::HashSet<_> = groups.iter()
            .filter(|g| g.is_sequence)
            .map(|g| g.tile_type)
            .collect();
        if starts.contains(&suit_base) && starts.contains(&(suit_base + 3)) && starts.contains(&(suit_base + 6)) {
            hits.push(hit(Yaku::Ittsu, is_concealed));
        }
    }

    // --- Sanshoku doujun ---
    for rank in 0u8..7 {
        let starts: std::collections::HashSet<_> = groups.iter().filter(|g| g.is_sequence).map(|g| g.tile_type % 9).collect();
        let suits: std::collections::HashSet<_> = groups.iter()
            .filter(|g| g.is_sequence && g.tile_type % 9 == rank)
            .map(|g| g.tile_type / 9)
            .collect();
        let _ = starts;
        if suits.len() == 3 { hits.push(hit(Yaku::SanshokuDoujun, is_concealed)); break; }
    }

    // --- Sanshoku doukou ---
    for rank in 0u8..9 {
        let suits: std::collections::HashSet<_> = groups.iter()
            .filter(|g| !g.is_sequence && g.tile_type < 27 && g.tile_type % 9 == rank)
            .map(|g| g.tile_type / 9)
            .collect();
        if suits.len() == 3 { hits.push(hit(Yaku::SanshokuDoukou, is_concealed)); break; }
    }

    // --- Shousangen ---
    let dragon_triplets = groups.iter().filter(|g| !g.is_sequence && is_dragon(g.tile_type)).count();
    if dragon_triplets == 2 && is_dragon(decomp.pair) { hits.push(hit(Yaku::Shousangen, is_concealed)); }

    // --- Honitsu / Chinitsu ---
    let all_tile_types = all_hand_tile_types(hand, melds);
    let suits_present: std::collections::HashSet<u8> = all_tile_types.iter().filter(|t| **t < 27).map(|t| t / 9).collect();
    let has_honor = all_tile_types.iter().any(|t| *t >= 27);
    if suits_present.len() <= 1 {
        if has_honor { hits.push(hit(Yaku::Honitsu, is_concealed)); } else { hits.push(hit(Yaku::Chinitsu, is_concealed)); }
    }

    let mut result = YakuResult::default();
    result.fu = compute_fu(decomp, &groups, decomp.pair, wait, is_concealed, ctx);
    result.han = hits.iter().map(|h| h.han as u32).sum();
    result.hits = hits;
    add_dora(&mut result, hand, melds, ctx);
    result
}

fn hit(y: Yaku, is_concealed: bool) -> YakuHit {
    let (closed, open) = y.han_closed_open();
    let han = if is_concealed { closed } else { open };
    YakuHit { id: y.id(), name: y.as_ref(), han }
}

fn round_wind_yaku(w: TileType) -> Yaku {
    match w - WIND_E { 0 => Yaku::YakuhaiRoundE, 1 => Yaku::YakuhaiRoundS, 2 => Yaku::YakuhaiRoundW, _ => Yaku::YakuhaiRoundN }
}
fn seat_wind_yaku(w: TileType) -> Yaku {
    match w - WIND_E { 0 => Yaku::YakuhaiSeatE, 1 => Yaku::YakuhaiSeatS, 2 => Yaku::YakuhaiSeatW, _ => Yaku::YakuhaiSeatN }
}
fn is_dragon(t: TileType) -> bool { DRAGONS.contains(&t) }

fn all_hand_tile_types(hand: &Hand, melds: &[Meld]) -> Vec<TileType> {
    let mut v = Vec::new();
    for (t, &c) in hand.counts.iter().enumerate() {
        for _ in 0..c { v.push(t as TileType); }
    }
    for m in melds { v.extend(m.tiles().iter().map(|t| t.tile_type())); }
    v
}

fn compute_fu(
    decomp: &Decomposition,
    groups: &[Group],
    pair: TileType,
    wait: WaitKind,
    is_concealed: bool,
    ctx: &EvalContext,
) -> u32 {
    let _ = decomp;
    let mut fu = 20u32;

    for g in groups {
        if g.is_sequence { continue; }
        let terminal = is_terminal_or_honor(g.tile_type);
        // The group completed by ron on a shanpon wait counts as open (minko) for fu even
        // though it was otherwise built from the closed hand.
        let counts_as_open = g.opened
            || (g.tile_type == ctx.win_tile.tile_type() && wait == WaitKind::Shanpon && matches!(ctx.method, WinMethod::Ron));
        fu += match (g.is_kan, terminal, counts_as_open) {
            (true, true, true) => 16,
            (true, true, false) => 32,
            (true, false, true) => 8,
            (true, false, false) => 16,
            (false, true, true) => 4,
            (false, true, false) => 8,
            (false, false, true) => 2,
            (false, false, false) => 4,
        };
    }

    if is_dragon(pair) || pair == ctx.round_wind { fu += 2; }
    if pair == ctx.seat_wind { fu += 2; }

    if matches!(wait, WaitKind::Kanchan | WaitKind::Penchan | WaitKind::Tanki) { fu += 2; }

    let is_pinfu_shape = is_concealed
        && groups.iter().all(|g| g.is_sequence)
        && !(is_dragon(pair) || pair == ctx.round_wind || pair == ctx.seat_wind);

    if is_concealed && matches!(ctx.method, WinMethod::Ron) { fu += 10; }
    if matches!(ctx.method, WinMethod::Tsumo) && !is_pinfu_shape { fu += 2; }

    if fu == 20 && matches!(ctx.method, WinMethod::Ron) && !is_concealed {
        return 30; // the "kuipinfu" open-ron exception
    }
    if fu == 20 { return 20; } // closed pinfu tsumo
    ((fu + 9) / 10) * 10
}

fn add_dora(result: &mut YakuResult, hand: &Hand, melds: &[Meld], ctx: &EvalContext) {
    if result.hits.is_empty() { return; } // yaku-shibari: dora never stands alone
    let all_types = all_hand_tile_types(hand, melds);
    let count_of = |types: &[TileType]| -> u32 {
        all_types.iter().filter(|t| types.contains(t)).count() as u32
    };
    let dora = count_of(&ctx.dora_types);
    let ura = if ctx.is_riichi || ctx.is_double_riichi { count_of(&ctx.ura_dora_types) } else { 0 };
    let aka = hand.red_five_count() + melds.iter().filter(|m| m.contains_red()).count() as u32;
    if dora > 0 { result.hits.push(YakuHit { id: DORA_ID, name: "Dora", han: dora as u8 }); result.han += dora; }
    if aka > 0 { result.hits.push(YakuHit { id: AKA_DORA_ID, name: "AkaDora", han: aka as u8 }); result.han += aka; }
    if ura > 0 { result.hits.push(YakuHit { id: URA_DORA_ID, name: "UraDora", han: ura as u8 }); result.han += ura; }
}

/// Evaluates the chiitoitsu (seven pairs) shape.
pub fn evaluate_chiitoitsu(hand: &Hand, ctx: &EvalContext) -> YakuResult {
    let mut hits = vec![hit(Yaku::Chiitoitsu, true)];
    if ctx.is_double_riichi { hits.push(hit(Yaku::DoubleRiichi, true)); }
    else if ctx.is_riichi { hits.push(hit(Yaku::Riichi, true)); }
    if ctx.is_ippatsu { hits.push(hit(Yaku::Ippatsu, true)); }
    if ctx.is_haitei { hits.push(hit(Yaku::Haitei, true)); }
    if ctx.is_houtei { hits.push(hit(Yaku::Houtei, true)); }
    if matches!(ctx.method, WinMethod::Tsumo) { hits.push(hit(Yaku::MenzenTsumo, true)); }

    let all_types: Vec<TileType> = (0..34u8).filter(|&t| hand.counts[t as usize] == 2).collect();
    let all_simple = all_types.iter().all(|t| !is_terminal_or_honor(*t));
    if all_simple { hits.push(hit(Yaku::Tanyao, true)); }
    let all_terminal_honor = all_types.iter().all(|t| is_terminal_or_honor(*t));
    if all_terminal_honor { hits.push(hit(Yaku::Honroutou, true)); }
    let suits: std::collections::HashSet<u8> = all_types.iter().filter(|t| **t < 27).map(|t| t / 9).collect();
    let has_honor = all_types.iter().any(|t| *t >= 27);
    if suits.len() <= 1 {
        if has_honor { hits.push(hit(Yaku::Honitsu, true)); } else { hits.push(hit(Yaku::Chinitsu, true)); }
    }

    let mut result = YakuResult { fu: 25, han: hits.iter().map(|h| h.han as u32).sum(), hits, yakuman_units: 0 };
    add_dora(&mut result, hand, &[], ctx);
    result
}

/// Checks the kokushi musou yakuman shape. Caller has already confirmed [`crate::decomp::is_kokushi`].
pub fn evaluate_kokushi(_hand: &Hand, _ctx: &EvalContext) -> YakuResult {
    YakuResult {
        hits: vec![YakuHit { id: Yaku::Kokushi.id(), name: Yaku::Kokushi.as_ref(), han: 0 }],
        fu: 0,
        han: 0,
        yakuman_units: Yaku::Kokushi.yakuman_value(),
    }
}

fn check_yakuman(
    hand: &Hand,
    melds: &[Meld],
    groups: &[Group],
    decomp: &Decomposition,
    ctx: &EvalContext,
    wait: WaitKind,
    is_concealed: bool,
) -> Option<Vec<Yaku>> {
    let mut found = Vec::new();

    if is_concealed {
        let concealed_ankou = groups.iter()
            .filter(|g| !g.is_sequence && !g.opened)
            .filter(|g| !(g.tile_type == ctx.win_tile.tile_type() && wait == WaitKind::Shanpon && matches!(ctx.method, WinMethod::Ron)))
            .count();
        if concealed_ankou == 4 {
            found.push(if wait == WaitKind::Tanki { Yaku::SuuankouTanki } else { Yaku::Suuankou });
        }
    }

    let dragon_sets = groups.iter().filter(|g| !g.is_sequence && is_dragon(g.tile_type)).count();
    if dragon_sets == 3 { found.push(Yaku::Daisangen); }

    let wind_sets = groups.iter().filter(|g| !g.is_sequence && WINDS.contains(&g.tile_type)).count();
    if wind_sets == 4 { found.push(Yaku::Daisuushi); }
    else if wind_sets == 3 && WINDS.contains(&decomp.pair) { found.push(Yaku::Shousuushi); }

    let all_types = all_hand_tile_types(hand, melds);
    if all_types.iter().all(|t| is_honor(*t)) { found.push(Yaku::Tsuuiisou); }
    if all_types.iter().all(|t| is_terminal(*t)) { found.push(Yaku::Chinroutou); }
    if all_types.iter().all(|t| GREEN_TYPES.contains(t)) { found.push(Yaku::Ryuuiisou); }

    if melds.is_empty() {
        for suit in 0u8..3 {
            let base = suit * 9;
            let mut counts = [0u8; 9];
            let mut in_suit = 0u32;
            for r in 0..9 { counts[r as usize] = hand.counts[(base + r) as usize]; in_suit += counts[r as usize] as u32; }
            if in_suit != 14 { continue; }
            if counts[0] < 3 || counts[8] < 3 { continue; }
            if (1..8).any(|r| counts[r] < 1) { continue; }
            found.push(Yaku::Chuurenpoutou);
            let win_rank = ctx.win_tile.tile_type() as i16 - base as i16;
            if (0..9).contains(&win_rank) {
                let mut pre_win = counts;
                pre_win[win_rank as usize] -= 1;
                let pure = [3u8, 1, 1, 1, 1, 1, 1, 1, 3];
                if pre_win == pure { found.push(Yaku::JunseiChuurenpoutou); }
            }
            break;
        }
    }

    let kan_count = groups.iter().filter(|g| g.is_kan).count();
    if kan_count == 4 { found.push(Yaku::Suukantsu); }

    if ctx.is_tenhou { found.push(Yaku::Tenhou); }
    if ctx.is_chiihou { found.push(Yaku::Chiihou); }

    if found.is_empty() { None } else { Some(found) }
}

/// Evaluates a complete hand (concealed [`Hand`] including the winning tile, plus melds) by
/// trying every applicable shape (kokushi, chiitoitsu, every standard decomposition) and keeping
/// the highest-scoring reading, per the usual rule that an ambiguous hand is scored to the
/// player's advantage.
pub fn evaluate(hand: &Hand, melds: &[Meld], ctx: &EvalContext) -> YakuResult {
    if melds.is_empty() && crate::decomp::is_kokushi(&hand.counts) {
        return evaluate_kokushi(hand, ctx);
    }
    if melds.is_empty() && crate::decomp::is_chiitoitsu(&hand.counts) {
        return evaluate_chiitoitsu(hand, ctx);
    }
    let num_concealed_sets = 4 - melds.len();
    let decomps = crate::decomp::decompose_standard(&hand.counts, num_concealed_sets);
    decomps.iter()
        .map(|d| evaluate_standard(hand, melds, d, ctx))
        .max_by_key(|r| (r.yakuman_units, r.han, r.fu))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meld::Pon;
    use crate::seat::Seat;
    use crate::tile::{self, WIND_E, WIND_S};
    use pretty_assertions::assert_eq;

    fn base_ctx(win_tile: &str, method: WinMethod) -> EvalContext {
        EvalContext {
            win_tile: win_tile.parse().unwrap(),
            method,
            is_riichi: false,
            is_double_riichi: false,
            is_ippatsu: false,
            is_haitei: false,
            is_houtei: false,
            is_rinshan: false,
            is_chankan: false,
            is_tenhou: false,
            is_chiihou: false,
            seat_wind: WIND_E,
            round_wind: WIND_E,
            dora_types: vec![],
            ura_dora_types: vec![],
        }
    }

    #[test]
    fn closed_ryanmen_ron_is_pinfu_and_tanyao_30fu() {
        let hand = Hand::from_tiles(tile::tiles_from_mpsz("234m567m345p678s55s"));
        let ctx = base_ctx("4m", WinMethod::Ron);
        let result = evaluate(&hand, &[], &ctx);
        assert!(result.hits.iter().any(|h| h.name == "Pinfu"));
        assert!(result.hits.iter().any(|h| h.name == "Tanyao"));
        assert_eq!(result.han, 2);
        assert_eq!(result.fu, 30);
    }

    #[test]
    fn open_round_wind_triplet_scores_yakuhai() {
        let hand = Hand::from_tiles(tile::tiles_from_mpsz("234m567p789s11p"));
        let south: Tile = "2z".parse().unwrap();
        let pon = Pon::new(south, south, south, Seat::West).unwrap();
        let melds = [Meld::Pon(pon)];
        let mut ctx = base_ctx("7s", WinMethod::Ron);
        ctx.round_wind = WIND_S;
        let result = evaluate(&hand, &melds, &ctx);
        assert!(result.hits.iter().any(|h| h.name == "YakuhaiRoundS" && h.han == 1));
    }

    #[test]
    fn chiitoitsu_is_recognized_with_fixed_fu() {
        let hand = Hand::from_tiles(tile::tiles_from_mpsz("11223344556677z"));
        let ctx = base_ctx("7z", WinMethod::Tsumo);
        let result = evaluate(&hand, &[], &ctx);
        assert!(result.hits.iter().any(|h| h.name == "Chiitoitsu"));
        assert_eq!(result.fu, 25);
    }

    #[test]
    fn kokushi_is_a_yakuman() {
        let hand = Hand::from_tiles(tile::tiles_from_mpsz("19m19p19s1234567z1z"));
        let ctx = base_ctx("1z", WinMethod::Ron);
        let result = evaluate(&hand, &[], &ctx);
        assert_eq!(result.yakuman_units, 1);
    }
}
