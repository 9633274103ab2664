//! Marching cubes case table
//!
//! For each of the 256 corner configurations of a cube, this lists the edges
//! crossed by the surface, grouped into triangles.  Corner and edge numbering
//! is described in [`types`](super::types).
//!
//! Most of the 256 cases are rotations or complements of a small set of base
//! cases; the comment on each line gives the case index followed by its base
//! case.  The table was adapted from the one in VTK.  Ambiguous faces are
//! resolved by whatever diagonal the table picks, so it must not be edited:
//! changing an entry changes which of two valid triangulations is produced.

/// Edges crossed by the surface, grouped into triangles
///
/// This is indexed by [`CaseIndex`](super::types::CaseIndex); each group of
/// three edges is one triangle, wound consistently across the table.
#[rustfmt::skip]
pub(crate) const CASE_EDGES: [&[u8]; 256] = [
    &[], // 0 0
    &[0, 3, 8], // 1 1
    &[0, 9, 1], // 2 1
    &[1, 3, 8, 9, 1, 8], // 3 2
    &[1, 11, 2], // 4 1
    &[0, 3, 8, 1, 11, 2], // 5 3
    &[9, 11, 2, 0, 9, 2], // 6 2
    &[2, 3, 8, 2, 8, 11, 11, 8, 9], // 7 5
    &[3, 2, 10], // 8 1
    &[0, 2, 10, 8, 0, 10], // 9 2
    &[1, 0, 9, 2, 10, 3], // 10 3
    &[1, 2, 10, 1, 10, 9, 9, 10, 8], // 11 5
    &[3, 1, 11, 10, 3, 11], // 12 2
    &[0, 1, 11, 0, 11, 8, 8, 11, 10], // 13 5
    &[3, 0, 9, 3, 9, 10, 10, 9, 11], // 14 5
    &[9, 11, 8, 11, 10, 8], // 15 8
    &[4, 8, 7], // 16 1
    &[4, 0, 3, 7, 4, 3], // 17 2
    &[0, 9, 1, 8, 7, 4], // 18 3
    &[4, 9, 1, 4, 1, 7, 7, 1, 3], // 19 5
    &[1, 11, 2, 8, 7, 4], // 20 4
    &[3, 7, 4, 3, 4, 0, 1, 11, 2], // 21 7
    &[9, 11, 2, 9, 2, 0, 8, 7, 4], // 22 7
    &[2, 9, 11, 2, 7, 9, 2, 3, 7, 7, 4, 9], // 23 14
    &[8, 7, 4, 3, 2, 10], // 24 3
    &[10, 7, 4, 10, 4, 2, 2, 4, 0], // 25 5
    &[9, 1, 0, 8, 7, 4, 2, 10, 3], // 26 6
    &[4, 10, 7, 9, 10, 4, 9, 2, 10, 9, 1, 2], // 27 9
    &[3, 1, 11, 3, 11, 10, 7, 4, 8], // 28 7
    &[1, 11, 10, 1, 10, 4, 1, 4, 0, 7, 4, 10], // 29 11
    &[4, 8, 7, 9, 10, 0, 9, 11, 10, 10, 3, 0], // 30 12
    &[4, 10, 7, 4, 9, 10, 9, 11, 10], // 31 5
    &[9, 4, 5], // 32 1
    &[9, 4, 5, 0, 3, 8], // 33 3
    &[0, 4, 5, 1, 0, 5], // 34 2
    &[8, 4, 5, 8, 5, 3, 3, 5, 1], // 35 5
    &[1, 11, 2, 9, 4, 5], // 36 3
    &[3, 8, 0, 1, 11, 2, 4, 5, 9], // 37 6
    &[5, 11, 2, 5, 2, 4, 4, 2, 0], // 38 5
    &[2, 5, 11, 3, 5, 2, 3, 4, 5, 3, 8, 4], // 39 9
    &[9, 4, 5, 2, 10, 3], // 40 4
    &[0, 2, 10, 0, 10, 8, 4, 5, 9], // 41 7
    &[0, 4, 5, 0, 5, 1, 2, 10, 3], // 42 7
    &[2, 5, 1, 2, 8, 5, 2, 10, 8, 4, 5, 8], // 43 11
    &[11, 10, 3, 11, 3, 1, 9, 4, 5], // 44 7
    &[4, 5, 9, 0, 1, 8, 8, 1, 11, 8, 11, 10], // 45 12
    &[5, 0, 4, 5, 10, 0, 5, 11, 10, 10, 3, 0], // 46 14
    &[5, 8, 4, 5, 11, 8, 11, 10, 8], // 47 5
    &[9, 8, 7, 5, 9, 7], // 48 2
    &[9, 0, 3, 9, 3, 5, 5, 3, 7], // 49 5
    &[0, 8, 7, 0, 7, 1, 1, 7, 5], // 50 5
    &[1, 3, 5, 3, 7, 5], // 51 8
    &[9, 8, 7, 9, 7, 5, 11, 2, 1], // 52 7
    &[11, 2, 1, 9, 0, 5, 5, 0, 3, 5, 3, 7], // 53 12
    &[8, 2, 0, 8, 5, 2, 8, 7, 5, 11, 2, 5], // 54 11
    &[2, 5, 11, 2, 3, 5, 3, 7, 5], // 55 5
    &[7, 5, 9, 7, 9, 8, 3, 2, 10], // 56 7
    &[9, 7, 5, 9, 2, 7, 9, 0, 2, 2, 10, 7], // 57 14
    &[2, 10, 3, 0, 8, 1, 1, 8, 7, 1, 7, 5], // 58 12
    &[10, 1, 2, 10, 7, 1, 7, 5, 1], // 59 5
    &[9, 8, 5, 8, 7, 5, 11, 3, 1, 11, 10, 3], // 60 10
    &[5, 0, 7, 5, 9, 0, 7, 0, 10, 1, 11, 0, 10, 0, 11], // 61 7
    &[10, 0, 11, 10, 3, 0, 11, 0, 5, 8, 7, 0, 5, 0, 7], // 62 7
    &[10, 5, 11, 7, 5, 10], // 63 2
    &[11, 5, 6], // 64 1
    &[0, 3, 8, 5, 6, 11], // 65 4
    &[9, 1, 0, 5, 6, 11], // 66 3
    &[1, 3, 8, 1, 8, 9, 5, 6, 11], // 67 7
    &[1, 5, 6, 2, 1, 6], // 68 2
    &[1, 5, 6, 1, 6, 2, 3, 8, 0], // 69 7
    &[9, 5, 6, 9, 6, 0, 0, 6, 2], // 70 5
    &[5, 8, 9, 5, 2, 8, 5, 6, 2, 3, 8, 2], // 71 11
    &[2, 10, 3, 11, 5, 6], // 72 3
    &[10, 8, 0, 10, 0, 2, 11, 5, 6], // 73 7
    &[0, 9, 1, 2, 10, 3, 5, 6, 11], // 74 6
    &[5, 6, 11, 1, 2, 9, 9, 2, 10, 9, 10, 8], // 75 12
    &[6, 10, 3, 6, 3, 5, 5, 3, 1], // 76 5
    &[0, 10, 8, 0, 5, 10, 0, 1, 5, 5, 6, 10], // 77 14
    &[3, 6, 10, 0, 6, 3, 0, 5, 6, 0, 9, 5], // 78 9
    &[6, 9, 5, 6, 10, 9, 10, 8, 9], // 79 5
    &[5, 6, 11, 4, 8, 7], // 80 3
    &[4, 0, 3, 4, 3, 7, 6, 11, 5], // 81 7
    &[1, 0, 9, 5, 6, 11, 8, 7, 4], // 82 6
    &[11, 5, 6, 1, 7, 9, 1, 3, 7, 7, 4, 9], // 83 12
    &[6, 2, 1, 6, 1, 5, 4, 8, 7], // 84 7
    &[1, 5, 2, 5, 6, 2, 3, 4, 0, 3, 7, 4], // 85 10
    &[8, 7, 4, 9, 5, 0, 0, 5, 6, 0, 6, 2], // 86 12
    &[7, 9, 3, 7, 4, 9, 3, 9, 2, 5, 6, 9, 2, 9, 6], // 87 7
    &[3, 2, 10, 7, 4, 8, 11, 5, 6], // 88 6
    &[5, 6, 11, 4, 2, 7, 4, 0, 2, 2, 10, 7], // 89 12
    &[0, 9, 1, 4, 8, 7, 2, 10, 3, 5, 6, 11], // 90 13
    &[9, 1, 2, 9, 2, 10, 9, 10, 4, 7, 4, 10, 5, 6, 11], // 91 6
    &[8, 7, 4, 3, 5, 10, 3, 1, 5, 5, 6, 10], // 92 12
    &[5, 10, 1, 5, 6, 10, 1, 10, 0, 7, 4, 10, 0, 10, 4], // 93 7
    &[0, 9, 5, 0, 5, 6, 0, 6, 3, 10, 3, 6, 8, 7, 4], // 94 6
    &[6, 9, 5, 6, 10, 9, 4, 9, 7, 7, 9, 10], // 95 3
    &[11, 9, 4, 6, 11, 4], // 96 2
    &[4, 6, 11, 4, 11, 9, 0, 3, 8], // 97 7
    &[11, 1, 0, 11, 0, 6, 6, 0, 4], // 98 5
    &[8, 1, 3, 8, 6, 1, 8, 4, 6, 6, 11, 1], // 99 14
    &[1, 9, 4, 1, 4, 2, 2, 4, 6], // 100 5
    &[3, 8, 0, 1, 9, 2, 2, 9, 4, 2, 4, 6], // 101 12
    &[0, 4, 2, 4, 6, 2], // 102 8
    &[8, 2, 3, 8, 4, 2, 4, 6, 2], // 103 5
    &[11, 9, 4, 11, 4, 6, 10, 3, 2], // 104 7
    &[0, 2, 8, 2, 10, 8, 4, 11, 9, 4, 6, 11], // 105 10
    &[3, 2, 10, 0, 6, 1, 0, 4, 6, 6, 11, 1], // 106 12
    &[6, 1, 4, 6, 11, 1, 4, 1, 8, 2, 10, 1, 8, 1, 10], // 107 7
    &[9, 4, 6, 9, 6, 3, 9, 3, 1, 10, 3, 6], // 108 11
    &[8, 1, 10, 8, 0, 1, 10, 1, 6, 9, 4, 1, 6, 1, 4], // 109 7
    &[3, 6, 10, 3, 0, 6, 0, 4, 6], // 110 5
    &[6, 8, 4, 10, 8, 6], // 111 2
    &[7, 6, 11, 7, 11, 8, 8, 11, 9], // 112 5
    &[0, 3, 7, 0, 7, 11, 0, 11, 9, 6, 11, 7], // 113 11
    &[11, 7, 6, 1, 7, 11, 1, 8, 7, 1, 0, 8], // 114 9
    &[11, 7, 6, 11, 1, 7, 1, 3, 7], // 115 5
    &[1, 6, 2, 1, 8, 6, 1, 9, 8, 8, 7, 6], // 116 14
    &[2, 9, 6, 2, 1, 9, 6, 9, 7, 0, 3, 9, 7, 9, 3], // 117 7
    &[7, 0, 8, 7, 6, 0, 6, 2, 0], // 118 5
    &[7, 2, 3, 6, 2, 7], // 119 2
    &[2, 10, 3, 11, 8, 6, 11, 9, 8, 8, 7, 6], // 120 12
    &[2, 7, 0, 2, 10, 7, 0, 7, 9, 6, 11, 7, 9, 7, 11], // 121 7
    &[1, 0, 8, 1, 8, 7, 1, 7, 11, 6, 11, 7, 2, 10, 3], // 122 6
    &[10, 1, 2, 10, 7, 1, 11, 1, 6, 6, 1, 7], // 123 3
    &[8, 6, 9, 8, 7, 6, 9, 6, 1, 10, 3, 6, 1, 6, 3], // 124 7
    &[0, 1, 9, 10, 7, 6], // 125 4
    &[7, 0, 8, 7, 6, 0, 3, 0, 10, 10, 0, 6], // 126 3
    &[7, 6, 10], // 127 1
    &[7, 10, 6], // 128 1
    &[3, 8, 0, 10, 6, 7], // 129 3
    &[0, 9, 1, 10, 6, 7], // 130 4
    &[8, 9, 1, 8, 1, 3, 10, 6, 7], // 131 7
    &[11, 2, 1, 6, 7, 10], // 132 3
    &[1, 11, 2, 3, 8, 0, 6, 7, 10], // 133 6
    &[2, 0, 9, 2, 9, 11, 6, 7, 10], // 134 7
    &[6, 7, 10, 2, 3, 11, 11, 3, 8, 11, 8, 9], // 135 12
    &[7, 3, 2, 6, 7, 2], // 136 2
    &[7, 8, 0, 7, 0, 6, 6, 0, 2], // 137 5
    &[2, 6, 7, 2, 7, 3, 0, 9, 1], // 138 7
    &[1, 2, 6, 1, 6, 8, 1, 8, 9, 8, 6, 7], // 139 14
    &[11, 6, 7, 11, 7, 1, 1, 7, 3], // 140 5
    &[11, 6, 7, 1, 11, 7, 1, 7, 8, 1, 8, 0], // 141 9
    &[0, 7, 3, 0, 11, 7, 0, 9, 11, 6, 7, 11], // 142 11
    &[7, 11, 6, 7, 8, 11, 8, 9, 11], // 143 5
    &[6, 4, 8, 10, 6, 8], // 144 2
    &[3, 10, 6, 3, 6, 0, 0, 6, 4], // 145 5
    &[8, 10, 6, 8, 6, 4, 9, 1, 0], // 146 7
    &[9, 6, 4, 9, 3, 6, 9, 1, 3, 10, 6, 3], // 147 11
    &[6, 4, 8, 6, 8, 10, 2, 1, 11], // 148 7
    &[1, 11, 2, 3, 10, 0, 0, 10, 6, 0, 6, 4], // 149 12
    &[4, 8, 10, 4, 10, 6, 0, 9, 2, 2, 9, 11], // 150 10
    &[11, 3, 9, 11, 2, 3, 9, 3, 4, 10, 6, 3, 4, 3, 6], // 151 7
    &[8, 3, 2, 8, 2, 4, 4, 2, 6], // 152 5
    &[0, 2, 4, 4, 2, 6], // 153 8
    &[1, 0, 9, 2, 4, 3, 2, 6, 4, 4, 8, 3], // 154 12
    &[1, 4, 9, 1, 2, 4, 2, 6, 4], // 155 5
    &[8, 3, 1, 8, 1, 6, 8, 6, 4, 6, 1, 11], // 156 14
    &[11, 0, 1, 11, 6, 0, 6, 4, 0], // 157 5
    &[4, 3, 6, 4, 8, 3, 6, 3, 11, 0, 9, 3, 11, 3, 9], // 158 7
    &[11, 4, 9, 6, 4, 11], // 159 2
    &[4, 5, 9, 7, 10, 6], // 160 3
    &[0, 3, 8, 4, 5, 9, 10, 6, 7], // 161 6
    &[5, 1, 0, 5, 0, 4, 7, 10, 6], // 162 7
    &[10, 6, 7, 8, 4, 3, 3, 4, 5, 3, 5, 1], // 163 12
    &[9, 4, 5, 11, 2, 1, 7, 10, 6], // 164 6
    &[6, 7, 10, 1, 11, 2, 0, 3, 8, 4, 5, 9], // 165 13
    &[7, 10, 6, 5, 11, 4, 4, 11, 2, 4, 2, 0], // 166 12
    &[3, 8, 4, 3, 4, 5, 3, 5, 2, 11, 2, 5, 10, 6, 7], // 167 6
    &[7, 3, 2, 7, 2, 6, 5, 9, 4], // 168 7
    &[9, 4, 5, 0, 6, 8, 0, 2, 6, 6, 7, 8], // 169 12
    &[3, 2, 6, 3, 6, 7, 1, 0, 5, 5, 0, 4], // 170 10
    &[6, 8, 2, 6, 7, 8, 2, 8, 1, 4, 5, 8, 1, 8, 5], // 171 7
    &[9, 4, 5, 11, 6, 1, 1, 6, 7, 1, 7, 3], // 172 12
    &[1, 11, 6, 1, 6, 7, 1, 7, 0, 8, 0, 7, 9, 4, 5], // 173 6
    &[4, 11, 0, 4, 5, 11, 0, 11, 3, 6, 7, 11, 3, 11, 7], // 174 7
    &[7, 11, 6, 7, 8, 11, 5, 11, 4, 4, 11, 8], // 175 3
    &[6, 5, 9, 6, 9, 10, 10, 9, 8], // 176 5
    &[3, 10, 6, 0, 3, 6, 0, 6, 5, 0, 5, 9], // 177 9
    &[0, 8, 10, 0, 10, 5, 0, 5, 1, 5, 10, 6], // 178 14
    &[6, 3, 10, 6, 5, 3, 5, 1, 3], // 179 5
    &[1, 11, 2, 9, 10, 5, 9, 8, 10, 10, 6, 5], // 180 12
    &[0, 3, 10, 0, 10, 6, 0, 6, 9, 5, 9, 6, 1, 11, 2], // 181 6
    &[10, 5, 8, 10, 6, 5, 8, 5, 0, 11, 2, 5, 0, 5, 2], // 182 7
    &[6, 3, 10, 6, 5, 3, 2, 3, 11, 11, 3, 5], // 183 3
    &[5, 9, 8, 5, 8, 2, 5, 2, 6, 3, 2, 8], // 184 11
    &[9, 6, 5, 9, 0, 6, 0, 2, 6], // 185 5
    &[1, 8, 5, 1, 0, 8, 5, 8, 6, 3, 2, 8, 6, 8, 2], // 186 7
    &[1, 6, 5, 2, 6, 1], // 187 2
    &[1, 6, 3, 1, 11, 6, 3, 6, 8, 5, 9, 6, 8, 6, 9], // 188 7
    &[11, 0, 1, 11, 6, 0, 9, 0, 5, 5, 0, 6], // 189 3
    &[0, 8, 3, 5, 11, 6], // 190 4
    &[11, 6, 5], // 191 1
    &[10, 11, 5, 7, 10, 5], // 192 2
    &[10, 11, 5, 10, 5, 7, 8, 0, 3], // 193 7
    &[5, 7, 10, 5, 10, 11, 1, 0, 9], // 194 7
    &[11, 5, 7, 11, 7, 10, 9, 1, 8, 8, 1, 3], // 195 10
    &[10, 2, 1, 10, 1, 7, 7, 1, 5], // 196 5
    &[0, 3, 8, 1, 7, 2, 1, 5, 7, 7, 10, 2], // 197 12
    &[9, 5, 7, 9, 7, 2, 9, 2, 0, 2, 7, 10], // 198 14
    &[7, 2, 5, 7, 10, 2, 5, 2, 9, 3, 8, 2, 9, 2, 8], // 199 7
    &[2, 11, 5, 2, 5, 3, 3, 5, 7], // 200 5
    &[8, 0, 2, 8, 2, 5, 8, 5, 7, 11, 5, 2], // 201 11
    &[9, 1, 0, 5, 3, 11, 5, 7, 3, 3, 2, 11], // 202 12
    &[9, 2, 8, 9, 1, 2, 8, 2, 7, 11, 5, 2, 7, 2, 5], // 203 7
    &[1, 5, 3, 3, 5, 7], // 204 8
    &[0, 7, 8, 0, 1, 7, 1, 5, 7], // 205 5
    &[9, 3, 0, 9, 5, 3, 5, 7, 3], // 206 5
    &[9, 7, 8, 5, 7, 9], // 207 2
    &[5, 4, 8, 5, 8, 11, 11, 8, 10], // 208 5
    &[5, 4, 0, 5, 0, 10, 5, 10, 11, 10, 0, 3], // 209 14
    &[0, 9, 1, 8, 11, 4, 8, 10, 11, 11, 5, 4], // 210 12
    &[11, 4, 10, 11, 5, 4, 10, 4, 3, 9, 1, 4, 3, 4, 1], // 211 7
    &[2, 1, 5, 2, 5, 8, 2, 8, 10, 4, 8, 5], // 212 11
    &[0, 10, 4, 0, 3, 10, 4, 10, 5, 2, 1, 10, 5, 10, 1], // 213 7
    &[0, 5, 2, 0, 9, 5, 2, 5, 10, 4, 8, 5, 10, 5, 8], // 214 7
    &[9, 5, 4, 2, 3, 10], // 215 4
    &[2, 11, 5, 3, 2, 5, 3, 5, 4, 3, 4, 8], // 216 9
    &[5, 2, 11, 5, 4, 2, 4, 0, 2], // 217 5
    &[3, 2, 11, 3, 11, 5, 3, 5, 8, 4, 8, 5, 0, 9, 1], // 218 6
    &[5, 2, 11, 5, 4, 2, 1, 2, 9, 9, 2, 4], // 219 3
    &[8, 5, 4, 8, 3, 5, 3, 1, 5], // 220 5
    &[0, 5, 4, 1, 5, 0], // 221 2
    &[8, 5, 4, 8, 3, 5, 9, 5, 0, 0, 5, 3], // 222 3
    &[9, 5, 4], // 223 1
    &[4, 7, 10, 4, 10, 9, 9, 10, 11], // 224 5
    &[0, 3, 8, 4, 7, 9, 9, 7, 10, 9, 10, 11], // 225 12
    &[1, 10, 11, 1, 4, 10, 1, 0, 4, 7, 10, 4], // 226 11
    &[3, 4, 1, 3, 8, 4, 1, 4, 11, 7, 10, 4, 11, 4, 10], // 227 7
    &[4, 7, 10, 9, 4, 10, 9, 10, 2, 9, 2, 1], // 228 9
    &[9, 4, 7, 9, 7, 10, 9, 10, 1, 2, 1, 10, 0, 3, 8], // 229 6
    &[10, 4, 7, 10, 2, 4, 2, 0, 4], // 230 5
    &[10, 4, 7, 10, 2, 4, 8, 4, 3, 3, 4, 2], // 231 3
    &[2, 11, 9, 2, 9, 7, 2, 7, 3, 7, 9, 4], // 232 14
    &[9, 7, 11, 9, 4, 7, 11, 7, 2, 8, 0, 7, 2, 7, 0], // 233 7
    &[3, 11, 7, 3, 2, 11, 7, 11, 4, 1, 0, 11, 4, 11, 0], // 234 7
    &[1, 2, 11, 8, 4, 7], // 235 4
    &[4, 1, 9, 4, 7, 1, 7, 3, 1], // 236 5
    &[4, 1, 9, 4, 7, 1, 0, 1, 8, 8, 1, 7], // 237 3
    &[4, 3, 0, 7, 3, 4], // 238 2
    &[4, 7, 8], // 239 1
    &[9, 8, 11, 11, 8, 10], // 240 8
    &[3, 9, 0, 3, 10, 9, 10, 11, 9], // 241 5
    &[0, 11, 1, 0, 8, 11, 8, 10, 11], // 242 5
    &[3, 11, 1, 10, 11, 3], // 243 2
    &[1, 10, 2, 1, 9, 10, 9, 8, 10], // 244 5
    &[3, 9, 0, 3, 10, 9, 1, 9, 2, 2, 9, 10], // 245 3
    &[0, 10, 2, 8, 10, 0], // 246 2
    &[3, 10, 2], // 247 1
    &[2, 8, 3, 2, 11, 8, 11, 9, 8], // 248 5
    &[9, 2, 11, 0, 2, 9], // 249 2
    &[2, 8, 3, 2, 11, 8, 0, 8, 1, 1, 8, 11], // 250 3
    &[1, 2, 11], // 251 1
    &[1, 8, 3, 9, 8, 1], // 252 2
    &[0, 1, 9], // 253 1
    &[0, 8, 3], // 254 1
    &[], // 255 0
];
