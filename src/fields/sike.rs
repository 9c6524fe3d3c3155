// NIST lvl 1 SIKE prime: p = 2^216 * 3^137 - 1
// Fp434Ext: a finite field element GF(p^2) with modulus x^2 + 1.
const SIKE_P434_MODULUS: [u64; 7] = [
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
    0xFDC1767AE2FFFFFF,
    0x7BC65C783158AEA3,
    0x6CFC5FD681C52056,
    0x0002341F27177344,
];

// R^2 mod p for R = 2^448.
const SIKE_P434_R2: [u64; 7] = [
    0x28E55B65DCD69B30,
    0xACEC7367768798C2,
    0xAB27973F8311688D,
    0x175CC6AF8D6C7C0B,
    0xABCD92BF2DDE347E,
    0x69E16A61C7686D9A,
    0x000025A89BCDD12A,
];

// Window addition chain for x^((p-3)/4) in GF(p).
const SIKE_P434_POW_STRATEGY: [u32; 80] = [
    3, 10, 7, 5, 6, 5, 3, 8, 4, 7, 5, 6, 4, 5, 9, 6, 3, 11, 5, 5, 2, 8, 4, 7, 7, 8, 5, 6, 4, 8,
    5, 2, 10, 6, 5, 4, 8, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 1,
];
const SIKE_P434_MUL_STRATEGY: [u32; 80] = [
    2, 15, 9, 8, 14, 12, 2, 8, 5, 15, 8, 15, 6, 6, 3, 2, 0, 10, 9, 13, 1, 12, 3, 7, 1, 10, 8,
    11, 2, 15, 14, 1, 11, 12, 14, 3, 11, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 0,
];

crate::define_fp2_from_modulus!(
    typename = Fp434Ext,
    base_typename = Fp434,
    base_submod = fp434,
    modulus = SIKE_P434_MODULUS,
    bitlen = 434,
    mont_r2 = SIKE_P434_R2,
    pow_strategy = SIKE_P434_POW_STRATEGY,
    mul_strategy = SIKE_P434_MUL_STRATEGY,
    initial_mul = 8,
);

// NIST lvl 2 SIKE prime: p = 2^250 * 3^159 - 1
// Fp503Ext: a finite field element GF(p^2) with modulus x^2 + 1.
const SIKE_P503_MODULUS: [u64; 8] = [
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
    0xABFFFFFFFFFFFFFF,
    0x13085BDA2211E7A0,
    0x1B9BF6C87B7E7DAF,
    0x6045C6BDDA77A4D0,
    0x004066F541811E1E,
];

// R^2 mod p for R = 2^512.
const SIKE_P503_R2: [u64; 8] = [
    0x5289A0CF641D011F,
    0x9B88257189FED2B9,
    0xA3B365D58DC8F17A,
    0x5BC57AB6EFF168EC,
    0x9E51998BD84D4423,
    0xBF8999CBAC3B5695,
    0x46E9127BCE14CDB6,
    0x003F6CFCE8B81771,
];

// Window addition chain for x^((p-3)/4) in GF(p).
const SIKE_P503_POW_STRATEGY: [u32; 91] = [
    12, 5, 5, 2, 7, 11, 3, 8, 4, 11, 4, 7, 5, 6, 3, 7, 5, 7, 2, 12, 5, 6, 4, 6, 8, 6, 4, 7, 5,
    5, 8, 5, 8, 5, 5, 8, 9, 3, 6, 2, 10, 6, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 3,
];
const SIKE_P503_MUL_STRATEGY: [u32; 91] = [
    12, 11, 10, 0, 1, 8, 3, 7, 1, 8, 3, 6, 7, 14, 2, 14, 14, 9, 0, 13, 9, 15, 5, 12, 7, 13, 7,
    15, 6, 7, 9, 0, 5, 7, 6, 8, 8, 3, 7, 0, 10, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 3,
];

crate::define_fp2_from_modulus!(
    typename = Fp503Ext,
    base_typename = Fp503,
    base_submod = fp503,
    modulus = SIKE_P503_MODULUS,
    bitlen = 503,
    mont_r2 = SIKE_P503_R2,
    pow_strategy = SIKE_P503_POW_STRATEGY,
    mul_strategy = SIKE_P503_MUL_STRATEGY,
    initial_mul = 0,
);
