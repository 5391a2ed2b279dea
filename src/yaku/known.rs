//! The set of yaku (役) known to this crate, with stable numeric ids.
//!
//! Ordinary yaku occupy ids `0..35`; yakuman occupy `35..=50`; dora variants are not members of
//! this enum at all (they are not "yaku" for yaku-shibari purposes) and are represented by the
//! separate [`crate::yaku::DORA_ID`] / [`AKA_DORA_ID`] / [`URA_DORA_ID`] constants.
//!
//! <https://riichi.wiki/Yaku>

/// Stable id below which a yaku is an ordinary (non-yakuman) yaku.
pub const YAKUMAN_MIN: u16 = 35;
pub const YAKUMAN_MAX: u16 = 50;

pub const DORA_ID: u16 = 60;
pub const AKA_DORA_ID: u16 = 61;
pub const URA_DORA_ID: u16 = 62;

#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Hash,
    strum::FromRepr, strum::AsRefStr, strum::Display,
)]
#[repr(u16)]
pub enum Yaku {
    /// 門前清自摸和
    MenzenTsumo = 0,
    /// 立直
    Riichi = 1,
    /// 一発
    Ippatsu = 2,
    /// 槍槓
    Chankan = 3,
    /// 嶺上開花
    Rinshankaihou = 4,
    /// 海底摸月
    Haitei = 5,
    /// 河底撈魚
    Houtei = 6,
    /// 平和
    Pinfu = 7,
    /// 断幺九
    Tanyao = 8,
    /// 一盃口
    Iipeikou = 9,
    /// 役牌 白
    YakuhaiHaku = 10,
    /// 役牌 發
    YakuhaiHatsu = 11,
    /// 役牌 中
    YakuhaiChun = 12,
    /// 場風 東
    YakuhaiRoundE = 13,
    /// 場風 南
    YakuhaiRoundS = 14,
    /// 場風 西
    YakuhaiRoundW = 15,
    /// 場風 北
    YakuhaiRoundN = 16,
    /// 自風 東
    YakuhaiSeatE = 17,
    /// 自風 南
    YakuhaiSeatS = 18,
    /// 自風 西
    YakuhaiSeatW = 19,
    /// 自風 北
    YakuhaiSeatN = 20,
    /// 両立直
    DoubleRiichi = 21,
    /// 七対子
    Chiitoitsu = 22,
    /// 混全帯幺九
    Chanta = 23,
    /// 一気通貫
    Ittsu = 24,
    /// 三色同順
    SanshokuDoujun = 25,
    /// 三色同刻
    SanshokuDoukou = 26,
    /// 対々和
    Toitoi = 27,
    /// 三暗刻
    Sanankou = 28,
    /// 混老頭
    Honroutou = 29,
    /// 小三元
    Shousangen = 30,
    /// 混一色
    Honitsu = 31,
    /// 純全帯幺九
    Junchan = 32,
    /// 二盃口
    Ryanpeikou = 33,
    /// 清一色
    Chinitsu = 34,

    /// 国士無双
    Kokushi = 35,
    /// 四暗刻
    Suuankou = 36,
    /// 四暗刻単騎 (counted as a double yakuman)
    SuuankouTanki = 37,
    /// 大三元
    Daisangen = 38,
    /// 小四喜
    Shousuushi = 39,
    /// 大四喜 (double yakuman)
    Daisuushi = 40,
    /// 字一色
    Tsuuiisou = 41,
    /// 清老頭
    Chinroutou = 42,
    /// 緑一色
    Ryuuiisou = 43,
    /// 九蓮宝燈
    Chuurenpoutou = 44,
    /// 純正九蓮宝燈 (double yakuman)
    JunseiChuurenpoutou = 45,
    /// 四槓子
    Suukantsu = 46,
    /// 天和
    Tenhou = 47,
    /// 地和
    Chiihou = 48,
}

impl Yaku {
    pub const fn id(self) -> u16 { self as u16 }
    pub const fn is_yakuman(self) -> bool { self.id() >= YAKUMAN_MIN }
    /// Number of yakuman "units" this yaku is worth (1 for single, 2 for double yakuman).
    pub const fn yakuman_value(self) -> u8 {
        match self {
            Yaku::SuuankouTanki | Yaku::Daisuushi | Yaku::JunseiChuurenpoutou => 2,
            _ if self.is_yakuman() => 1,
            _ => 0,
        }
    }
    /// Closed-hand han value; open-hand han value (0 if the yaku requires a closed hand).
    pub const fn han_closed_open(self) -> (u8, u8) {
        use Yaku::*;
        match self {
            MenzenTsumo => (1, 0),
            Riichi => (1, 0),
            Ippatsu => (1, 0),
            Chankan => (1, 1),
            Rinshankaihou => (1, 1),
            Haitei => (1, 1),
            Houtei => (1, 1),
            Pinfu => (1, 0),
            Tanyao => (1, 1),
            Iipeikou => (1, 0),
            YakuhaiHaku | YakuhaiHatsu | YakuhaiChun => (1, 1),
            YakuhaiRoundE | YakuhaiRoundS | YakuhaiRoundW | YakuhaiRoundN => (1, 1),
            YakuhaiSeatE | YakuhaiSeatS | YakuhaiSeatW | YakuhaiSeatN => (1, 1),
            DoubleRiichi => (2, 0),
            Chiitoitsu => (2, 0),
            Chanta => (2, 1),
            Ittsu => (2, 1),
            SanshokuDoujun => (2, 1),
            SanshokuDoukou => (2, 2),
            Toitoi => (2, 2),
            Sanankou => (2, 2),
            Honroutou => (2, 2),
            Shousangen => (2, 2),
            Honitsu => (3, 2),
            Junchan => (3, 2),
            Ryanpeikou => (3, 0),
            Chinitsu => (6, 5),
            _ => (0, 0), // yakuman: value comes from yakuman_value()
        }
    }
}
