//! MJAI event log dialect --- the crate's own append-only event representation, and the wire
//! format used both for the GameState's internal log and for one of the two replay dialects.
//!
//! <https://mjai.app/docs/mjai-protocol>

use serde::{Deserialize, Serialize};

use crate::seat::Seat;
use crate::tile::Tile;

fn mjai_tiles(tiles: &[Tile]) -> Vec<String> { tiles.iter().map(|t| t.to_mjai()).collect() }

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MjaiEvent {
    StartGame { names: [String; 4] },
    StartKyoku {
        bakaze: String,
        kyoku: u8,
        honba: u32,
        kyotaku: u32,
        oya: Seat,
        dora_marker: String,
        /// Each seat's starting 13-tile hand, MJAI strings; masked to `"?"` for other seats in
        /// an [`crate::engine::observation::Observation`].
        tehais: [Vec<String>; 4],
        scores: [i64; 4],
    },
    Tsumo { actor: Seat, pai: String },
    Dahai { actor: Seat, pai: String, tsumogiri: bool },
    Chi { actor: Seat, target: Seat, pai: String, consumed: Vec<String> },
    Pon { actor: Seat, target: Seat, pai: String, consumed: Vec<String> },
    Daiminkan { actor: Seat, target: Seat, pai: String, consumed: Vec<String> },
    Ankan { actor: Seat, consumed: Vec<String> },
    Kakan { actor: Seat, pai: String, consumed: Vec<String> },
    Reach { actor: Seat },
    ReachAccepted { actor: Seat },
    Dora { dora_marker: String },
    Hora {
        actor: Seat,
        target: Seat,
        pai: String,
        yaku: Vec<u16>,
        han: u32,
        fu: u32,
        scores_delta: [i64; 4],
    },
    Ryukyoku { reason: String, scores_delta: [i64; 4] },
    EndKyoku,
    EndGame,
}

impl MjaiEvent {
    pub fn dahai(actor: Seat, tile: Tile, tsumogiri: bool) -> Self {
        MjaiEvent::Dahai { actor, pai: tile.to_mjai(), tsumogiri }
    }

    pub fn chi(actor: Seat, target: Seat, pai: Tile, consumed: &[Tile]) -> Self {
        MjaiEvent::Chi { actor, target, pai: pai.to_mjai(), consumed: mjai_tiles(consumed) }
    }

    pub fn pon(actor: Seat, target: Seat, pai: Tile, consumed: &[Tile]) -> Self {
        MjaiEvent::Pon { actor, target, pai: pai.to_mjai(), consumed: mjai_tiles(consumed) }
    }

    pub fn daiminkan(actor: Seat, target: Seat, pai: Tile, consumed: &[Tile]) -> Self {
        MjaiEvent::Daiminkan { actor, target, pai: pai.to_mjai(), consumed: mjai_tiles(consumed) }
    }

    pub fn ankan(actor: Seat, consumed: &[Tile]) -> Self {
        MjaiEvent::Ankan { actor, consumed: mjai_tiles(consumed) }
    }

    pub fn kakan(actor: Seat, pai: Tile, consumed: &[Tile]) -> Self {
        MjaiEvent::Kakan { actor, pai: pai.to_mjai(), consumed: mjai_tiles(consumed) }
    }

    pub fn hora(actor: Seat, target: Seat, pai: Tile, yaku: Vec<u16>, han: u32, fu: u32, scores_delta: [i64; 4]) -> Self {
        MjaiEvent::Hora { actor, target, pai: pai.to_mjai(), yaku, han, fu, scores_delta }
    }
}

/// Masks a start_kyoku record's non-`viewer` hands to arrays of `"?"`, matching the contract in
/// §"Observation contract": other seats' concealed tiles are hidden, but array length (hence
/// hand size) is preserved so an observer can still see how many tiles each opponent holds.
pub fn mask_for(event: &MjaiEvent, viewer: Seat) -> MjaiEvent {
    match event {
        MjaiEvent::StartKyoku { bakaze, kyoku, honba, kyotaku, oya, dora_marker, tehais, scores } => {
            let mut masked = tehais.clone();
            for (seat, hand) in Seat::ALL.iter().zip(masked.iter_mut()) {
                if *seat != viewer {
                    let len = hand.len();
                    *hand = vec!["?".to_string(); len];
                }
            }
            MjaiEvent::StartKyoku {
                bakaze: bakaze.clone(), kyoku: *kyoku, honba: *honba, kyotaku: *kyotaku,
                oya: *oya, dora_marker: dora_marker.clone(), tehais: masked, scores: *scores,
            }
        }
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masking_hides_other_seats_tehai_but_preserves_length() {
        let event = MjaiEvent::StartKyoku {
            bakaze: "E".into(), kyoku: 1, honba: 0, kyotaku: 0, oya: Seat::East,
            dora_marker: "1m".into(),
            tehais: [
                vec!["1m".into(); 13], vec!["2p".into(); 13],
                vec!["3s".into(); 13], vec!["E".into(); 13],
            ],
            scores: [25000; 4],
        };
        let masked = mask_for(&event, Seat::South);
        if let MjaiEvent::StartKyoku { tehais, .. } = masked {
            assert_eq!(tehais[Seat::East.to_usize()], vec!["?"; 13]);
            assert_eq!(tehais[Seat::South.to_usize()], vec!["2p"; 13]);
        } else {
            panic!("expected StartKyoku");
        }
    }
}
