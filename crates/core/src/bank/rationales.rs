/// Hand-written explanation per bank id.
pub(crate) const RATIONALES: &[(u32, &str)] = &[
    (1, "パテベラ は かべがみ を きる どうぐ では ない。したじ を ならす どうぐ だから。"),
    (2, "ひろい ところ は ながい メジャー が あんぜん で せいかく だから。"),
    (3, "パテ は なかぬり よう も ある から。"),
    (4, "おりもの の かべがみ も ある から。"),
    (5, "たかい さぎょう は おちる きけん を ふせぐ ため あんぜんたい を つかう から。"),
    (6, "てんばん に のる と てんとう の きけん が ある から。"),
    (7, "その マーク は きんし では ない は まちがい。🚫 は きんし の マーク だから。"),
    (8, "はばき は ゆか と かべ の つぎめ に つける から。"),
    (9, "ビニールクロス と いう かべがみ が ある から。"),
    (10, "たいひ の じゃま に なる から。"),
    (11, "おちる きけん を ふせぐ ため あんぜんたい を つかう から。"),
    (12, "とびおり は けが の げんいん に なる から。"),
    (13, "でんぷん のり と ごうせい せっちゃくざい の 2しゅるい が ある から。"),
    (14, "たちじょうぎ は ながさ を はかる どうぐ では なく すみだし に つかう から。"),
    (15, "いのちづな は おやづな に かけて つかう から。"),
    (16, "むじ の かべがみ も ある から。"),
    (17, "のり を ぬる のは のりばけ。クシばけ は べつ の しごと だから。"),
    (18, "せっこうボード は しつない の かべ や てんじょう の したじ に つかう から。"),
    (19, "げんば では ひふ を まもる ため ながそで が ひつよう だから。"),
    (20, "せっこうボード は その したじ に つかう から。"),
    (21, "なでばけ は のり を ぬる どうぐ では ない。はりあと を ならす どうぐ だから。"),
    (22, "かわく と せっちゃく りょく が へる から。"),
    (23, "⚠︎ は あんぜんつうろ では なく ちゅうい・きけん を しめす から。"),
    (24, "ですみ は そとがわ の かど の こと だから。"),
    (25, "ジョイント ぶ は パテ で ならし が ひつよう だから。"),
    (26, "その ざいりょう は へきそう はり の したじ に つかう から。"),
    (27, "ひ の きけん や ほこり たいさく の ため だから。"),
    (28, "ジョイント の ほうほう に つきつけ と かさねだち が ある から。"),
    (29, "パテ の あと は サンダー で ならす から。"),
    (30, "なでばけ は のり を ぬる どうぐ では ない から。"),
    (31, "そうじ は ビニールクロス の ほう が しやすい から。"),
    (32, "したじ と のり の つき を よく する から。"),
    (33, "すこし ながめ に きって はって から きわ を きる から。"),
    (34, "いりすみ は うちがわ の かど の こと だから。"),
    (35, "くうき を ぬく のは スムーサー。ほしつき は べつ の どうぐ だから。"),
    (36, "はさみ や カッター で さいだん する から。"),
    (37, "じべら は パテ を かける どうぐ では なく きる とき に そえる どうぐ だから。"),
    (38, "あんぜん の ため プラグ を ぬいて から しらべる から。"),
    (39, "とそう は かわき や かいそう で じかん が かかる から。"),
    (40, "みず で のばせる しゅるい も ある から。"),
    (41, "のこり のり を ふきとる ため だから。"),
    (42, "かべがみ を きる のは カッター。クシばけ は べつ の どうぐ だから。"),
    (43, "ななめ の ひかり の ほう が でこぼこ が みつけ やすい から。"),
    (44, "がら の ある かべがみ も ある から。"),
    (45, "あごひも を しめない と ぬげて あぶない から。"),
    (46, "シンナー は きけんぶつ なので かんき が ひつよう だから。"),
    (47, "でんげん まわり の きけん を ふせぐ ため だから。"),
    (48, "のりつけ した かべがみ は おりたたんで なじませて はこぶ から。"),
    (49, "かきげんきん では ひ の しよう は きんし だから。"),
    (50, "せっちゃく りょく を あげる ため だから。"),
    (51, "ひくくても とびおり は きけん だから。"),
    (52, "つねに まえ だけ を むく きまり では ない から。"),
    (53, "あか は きんし・ていし を しめす から。"),
    (54, "ふねん の かべがみ も ある から。"),
    (55, "かべ の きず や よごれ を ふせぐ ため だから。"),
    (56, "かべがみ の ほう が はやい から。"),
    (57, "じべら は カッター と いっしょ に きる とき に つかう から。"),
    (58, "したじ を たいら に ならす どうぐ だから。"),
    (59, "まわりぶち の のり を ふきとる ため だから。"),
    (60, "かべがみ に のり を つける とき に つかう から。"),
    (61, "その マーク の ばしょ は たちいり きんし だから。"),
    (62, "ひふ を まもる ため ながそで が ひつよう だから。"),
    (63, "くうき や しわ を ぬく ため だから。"),
    (64, "ジョイント の さぎょう で つかう から。"),
    (65, "てんばん に のる と てんとう の きけん が ある から。"),
    (66, "かきげんきん では ストーブ は つかえない から。"),
    (67, "つきつけ は したじき テープ を つかわない から。"),
    (68, "うわパテ は したパテ の あと に かける から。"),
    (69, "みずいと は すみだし に つかう。ジョイント の さぎょう では ない から。"),
    (70, "ジョイント ぶ は ローラー で おさえる から。"),
    (71, "のりつけ した かべがみ は たたんで なじませる から。"),
    (72, "シンナー しようじ は かんき の ため まど を あける から。"),
    (73, "あごひも を しめない と ぬげて あぶない から。"),
    (74, "⚠︎ は ちゅうい・きけん を しめす から。"),
    (75, "みず で うすめられる しゅるい も ある から。"),
    (76, "すきま を うめる ため はる まえ に つかう から。"),
    (77, "ななめ の ひかり で でこぼこ が みえる から。"),
    (78, "きかい を つかう とき は でんげん を いれる から。"),
    (79, "したぬり と うわぬり が ある から。"),
    (80, "ひろい ところ は ながい メジャー が あんぜん で せいかく だから。"),
    (81, "ながく おく と かわいて ちから が へる から。"),
    (82, "しょうか の じゃま に なる から。"),
    (83, "すべらない よう した を しっかり させる ため だから。"),
    (84, "かみ は たてめ の ほう が つよい から。"),
    (85, "あわてる と じこ が ひどく なる から。"),
    (86, "くらい いろ は へや を せまく みせる から。"),
    (87, "あかるい いろ は ひろく みえる から。"),
    (88, "たて がら は てんじょう を たかく みせる から。"),
    (89, "かべがみ は つぶれ にくい よう に たて に つむ から。"),
    (90, "でんぷん のり は かび の えさ に なりやすい から。"),
    (91, "がら を あわせて はる から。"),
    (92, "こしょう を ふせぐ ため まえ に てんけん する から。"),
    (93, "ななめ の ひかり の ほう が でこぼこ が みえる から。"),
    (94, "めじ や すきま を うめる から。"),
    (95, "わし クロス は つうきせい が よい から（『わるい』は まちがい）。"),
];
