use crate::fields::sike::{Fp434Ext, Fp503Ext};
use crate::protocols::sike::Sike;


mod p434 {
    use crate::fields::sike::Fp434Ext;
    use crate::protocols::sike::SikeParameters;

    // x(PA), the generator of the 2-torsion basis
    const X_PA: Fp434Ext = Fp434Ext::from_w64_mont(
        [
            0x05ADF455C5C345BF,
            0x91935C5CC767AC2B,
            0xAFE4E879951F0257,
            0x70E792DC89FA27B1,
            0xF797F526BB48C8CD,
            0x2181DB6131AF621F,
            0x00000A1C08B1ECC4,
        ],
        [
            0x74840EB87CDA7788,
            0x2971AA0ECF9F9D0B,
            0xCB5732BDF41715D5,
            0x8CD8E51F7AACFFAA,
            0xA7F424730D7E419F,
            0xD671EB919A179E8C,
            0x0000FFA26C5A924A,
        ],
    );

    // x(QA)
    const X_QA: Fp434Ext = Fp434Ext::from_w64_mont(
        [
            0xFEC6E64588B7273B,
            0xD2A626D74CBBF1C6,
            0xF8F58F07A78098C7,
            0xE23941F470841B03,
            0x1B63EDA2045538DD,
            0x735CFEB0FFD49215,
            0x0001C4CB77542876,
        ],
        [
            0xADB0F733C17FFDD6,
            0x6AFFBD037DA0A050,
            0x680EC43DB144E02F,
            0x1E2E5D5FF524E374,
            0xE2DDA115260E2995,
            0xA6E4B552E2EDE508,
            0x00018ECCDDF4B53E,
        ],
    );

    // x(QA - PA)
    const X_RA: Fp434Ext = Fp434Ext::from_w64_mont(
        [
            0x01BA4DB518CD6C7D,
            0x2CB0251FE3CC0611,
            0x259B0C6949A9121B,
            0x60E17AC16D2F82AD,
            0x3AA41F1CE175D92D,
            0x413FBE6A9B9BC4F3,
            0x00022A81D8D55643,
        ],
        [
            0xB8ADBC70FC82E54A,
            0xEF9CDDB0D5FADDED,
            0x5820C734C80096A0,
            0x7799994BAA96E0E4,
            0x044961599E379AF8,
            0xDB2B94FBF09F27E2,
            0x0000B87FC716C0C6,
        ],
    );

    // x(PB), the generator of the 3-torsion basis
    const X_PB: Fp434Ext = Fp434Ext::from_w64_mont(
        [
            0x6E5497556EDD48A3,
            0x2A61B501546F1C05,
            0xEB919446D049887D,
            0x5864A4A69D450C4F,
            0xB883F276A6490D2B,
            0x22CC287022D5F5B9,
            0x0001BED4772E551F,
        ],
        [
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
        ],
    );

    // x(QB)
    const X_QB: Fp434Ext = Fp434Ext::from_w64_mont(
        [
            0xFAE2A3F93D8B6B8E,
            0x494871F51700FE1C,
            0xEF1A94228413C27C,
            0x498FF4A4AF60BD62,
            0xB00AD2A708267E8A,
            0xF4328294E017837F,
            0x000034080181D8AE,
        ],
        [
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
        ],
    );

    // x(QB - PB)
    const X_RB: Fp434Ext = Fp434Ext::from_w64_mont(
        [
            0x283B34FAFEFDC8E4,
            0x9208F44977C3E647,
            0x7DEAE962816F4E9A,
            0x68A2BA8AA262EC9D,
            0x8176F112EA43F45B,
            0x02106D022634F504,
            0x00007E8A50F02E37,
        ],
        [
            0xB378B7C1DA22CCB1,
            0x6D089C99AD1D9230,
            0xEBE15711813E2369,
            0x2B35A68239D48A53,
            0x445F6FD138407C93,
            0xBEF93B29A3F6B54B,
            0x000173FA910377D3,
        ],
    );

    const STRATEGY_A: [usize; 107] = [
        48, 28, 16, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2,
        1, 1, 2, 1, 1, 13, 7, 4, 2, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 5, 4, 2, 1, 1, 2, 1, 1, 2,
        1, 1, 1, 21, 12, 7, 4, 2, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 5, 3, 2, 1, 1, 1, 1, 2, 1,
        1, 1, 9, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 4, 2, 1, 1, 1, 2, 1, 1,
    ];

    const STRATEGY_B: [usize; 136] = [
        66, 33, 17, 9, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 4, 2, 1, 1, 1, 2, 1, 1, 8, 4, 2, 1, 1,
        1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1, 16, 8, 4, 2, 1, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1, 8,
        4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1, 32, 16, 8, 4, 3, 1, 1, 1, 1, 2, 1, 1, 4, 2,
        1, 1, 2, 1, 1, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1, 16, 8, 4, 2, 1, 1, 2, 1, 1,
        4, 2, 1, 1, 2, 1, 1, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1,
    ];

    pub const PARAMS: SikeParameters<Fp434Ext> = SikeParameters {
        name: "SIKEp434",
        e_a: 216,
        e_b: 137,
        bits_a: 216,
        bits_b: 218,
        mask_a: 0xFF,
        mask_b: 0x01,
        message_bytes: 16,
        crypto_bytes: 16,
        x_pa: X_PA,
        x_qa: X_QA,
        x_ra: X_RA,
        x_pb: X_PB,
        x_qb: X_QB,
        x_rb: X_RB,
        tree_rows_a: 108,
        tree_rows_b: 137,
        strategy_a: &STRATEGY_A,
        strategy_b: &STRATEGY_B,
    };
}

mod p503 {
    use crate::fields::sike::Fp503Ext;
    use crate::protocols::sike::SikeParameters;

    // x(PA), the generator of the 2-torsion basis
    const X_PA: Fp503Ext = Fp503Ext::from_w64_mont(
        [
            0x5D083011589AD893,
            0xADFD8D2CB67D0637,
            0x330C9AC34FFB6361,
            0xF0D47489A2E805A2,
            0x27E2789259C6B8DC,
            0x63866A2C121931B9,
            0x8D4C65A7137DCF44,
            0x003A183AE5967B3F,
        ],
        [
            0x7E3541B8C96D1519,
            0xD3ADAEEC0D61A26C,
            0xC0A2219CE7703DD9,
            0xFF3E46658FCDBC52,
            0xD5B38DEAE6E196FF,
            0x1AAC826364956D58,
            0xEC9F4875B9A5F27A,
            0x001B0B475AB99843,
        ],
    );

    // x(QA)
    const X_QA: Fp503Ext = Fp503Ext::from_w64_mont(
        [
            0x4D83695107D03BAD,
            0x221F3299005E2FCF,
            0x78E6AE22F30DECF2,
            0x6D982DB5111253E4,
            0x504C80A8AB4526A8,
            0xEFD0C3AA210BB024,
            0xCB77483501DC6FCF,
            0x001052544A96BDF3,
        ],
        [
            0x0D74FE3402BCAE47,
            0xDF5B8CDA832D8AED,
            0xB86BCF06E4BD837E,
            0x892A2933A0FA1F63,
            0x9F88FC67B6CCB461,
            0x822926EA9DDA3AC8,
            0xEAC8DDE5855425ED,
            0x000618FE6DA37A80,
        ],
    );

    // x(QA - PA)
    const X_RA: Fp503Ext = Fp503Ext::from_w64_mont(
        [
            0x1D9D32D2DC877C17,
            0x5517CD8F71D5B02B,
            0x395AFB8F6B60C117,
            0x3AE31AC85F9098C8,
            0x5F5341C198450848,
            0xF8C609DBEA435C6A,
            0xD832BC7EDC7BA5E4,
            0x002AD98AA6968BF5,
        ],
        [
            0xC466CAB0F73C2E5B,
            0x7B1817148FB2CF9C,
            0x873E87C099E470A0,
            0xBB17AC6D17A7BAC1,
            0xA146FDCD0F2E2A58,
            0x88B311E9CEAB6201,
            0x37604CF5C7951757,
            0x0006804071C74BF9,
        ],
    );

    // x(PB), the generator of the 3-torsion basis
    const X_PB: Fp503Ext = Fp503Ext::from_w64_mont(
        [
            0xDF630FC5FB2468DB,
            0xC30C5541C102040E,
            0x3CDC9987B76511FC,
            0xF54B5A09353D0CDD,
            0x3ADBA8E00703C42F,
            0x8253F9303DDC95D0,
            0x62D30778763ABFD7,
            0x001CD00FB581CD55,
        ],
        [
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
        ],
    );

    // x(QB)
    const X_QB: Fp503Ext = Fp503Ext::from_w64_mont(
        [
            0x2E3457A12B429261,
            0x311F94E89627DCF8,
            0x5B71C98FD1DB73F6,
            0x3671DB7DCFC21541,
            0xB6D1484C9FE0CF4F,
            0x19CD110717356E35,
            0xF4F9FB00AC9919DF,
            0x0035BC124D38A70B,
        ],
        [
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
        ],
    );

    // x(QB - PB)
    const X_RB: Fp503Ext = Fp503Ext::from_w64_mont(
        [
            0x2E08BB99413D2952,
            0xD3021467CD088D72,
            0x21017AF859752245,
            0x26314ED8FFD9DE5C,
            0x4AF43C73344B6686,
            0xCFA1F91149DF0993,
            0xF327A95365587A89,
            0x000DBF54E03D3906,
        ],
        [
            0x03E03FF342F5F304,
            0x993D604D7B4B6E56,
            0x80412F4D9280E71F,
            0x0FFDC9EF990B3982,
            0xE584E64C51604931,
            0x1374F42AC8B0BBD7,
            0x07D5BC37DFA41A5F,
            0x00396CCFD61FD34C,
        ],
    );

    const STRATEGY_A: [usize; 124] = [
        61, 32, 16, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2,
        1, 1, 2, 1, 1, 16, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1, 8, 4, 2, 1, 1, 2, 1, 1,
        4, 2, 1, 1, 2, 1, 1, 29, 16, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1, 8, 4, 2, 1,
        1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1, 13, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1, 5, 4,
        2, 1, 1, 2, 1, 1, 2, 1, 1, 1,
    ];

    const STRATEGY_B: [usize; 158] = [
        71, 38, 21, 13, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1, 5, 4, 2, 1, 1, 2, 1, 1, 2,
        1, 1, 1, 9, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 4, 2, 1, 1, 1, 2, 1, 1, 17, 9, 5, 3, 2, 1,
        1, 1, 1, 2, 1, 1, 1, 4, 2, 1, 1, 1, 2, 1, 1, 8, 4, 2, 1, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2,
        1, 1, 33, 17, 9, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 4, 2, 1, 1, 1, 2, 1, 1, 8, 4, 2, 1,
        1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1, 16, 8, 4, 2, 1, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1,
        8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1,
    ];

    pub const PARAMS: SikeParameters<Fp503Ext> = SikeParameters {
        name: "SIKEp503",
        e_a: 250,
        e_b: 159,
        bits_a: 250,
        bits_b: 253,
        mask_a: 0x03,
        mask_b: 0x0F,
        message_bytes: 24,
        crypto_bytes: 24,
        x_pa: X_PA,
        x_qa: X_QA,
        x_ra: X_RA,
        x_pb: X_PB,
        x_qb: X_QB,
        x_rb: X_RB,
        tree_rows_a: 125,
        tree_rows_b: 159,
        strategy_a: &STRATEGY_A,
        strategy_b: &STRATEGY_B,
    };
}

pub const SIKE_P434: Sike<Fp434Ext> = Sike::new(p434::PARAMS);
pub const SIKE_P503: Sike<Fp503Ext> = Sike::new(p503::PARAMS);
